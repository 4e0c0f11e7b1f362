use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Rank {
  pub icon: String,
  pub label: String,
  #[serde(default)]
  pub special: bool,
}

impl Default for Rank {
  fn default() -> Self {
    Tier::all()[0].rank()
  }
}

impl Rank {
  /// Ranks loaded from outside the tier table sometimes carry a corrupted
  /// icon. Anything that is not an emoji is replaced with the entry tier's
  /// icon.
  #[must_use]
  pub fn with_checked_icon(mut self) -> Self {
    if !is_emoji(&self.icon) {
      log::warn!(
        "rank `{}` has a non-emoji icon {:?}, using default",
        self.label,
        self.icon
      );

      self.icon = Tier::all()[0].icon.to_string();
    }

    self
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tier {
  pub icon: &'static str,
  pub label: &'static str,
  pub min_points: u64,
  pub special: bool,
}

impl Tier {
  /// Every tier, lowest first. Tier numbers are 1-based positions in this
  /// slice.
  #[must_use]
  pub fn all() -> &'static [Tier] {
    &[
      Tier {
        icon: "🥉",
        label: "Freshman",
        min_points: 0,
        special: false,
      },
      Tier {
        icon: "🥈",
        label: "Sophomore",
        min_points: 100,
        special: false,
      },
      Tier {
        icon: "🥇",
        label: "Junior",
        min_points: 250,
        special: false,
      },
      Tier {
        icon: "🎖️",
        label: "Senior",
        min_points: 500,
        special: false,
      },
      Tier {
        icon: "🏆",
        label: "Veteran",
        min_points: 1000,
        special: false,
      },
      Tier {
        icon: "👑",
        label: "Master",
        min_points: 2500,
        special: true,
      },
      Tier {
        icon: "🌟",
        label: "Legend",
        min_points: 5000,
        special: true,
      },
    ]
  }

  #[must_use]
  pub fn rank(&self) -> Rank {
    Rank {
      icon: self.icon.to_string(),
      label: self.label.to_string(),
      special: self.special,
    }
  }
}

/// Looks up a 1-based tier number.
///
/// # Errors
///
/// Returns [`UnknownTierError`] when `tier` is outside the table.
pub fn classify(tier: u8) -> Result<Rank, UnknownTierError> {
  usize::from(tier)
    .checked_sub(1)
    .and_then(|position| Tier::all().get(position))
    .map(Tier::rank)
    .ok_or(UnknownTierError { tier })
}

#[must_use]
pub fn classify_points(points: u64) -> Rank {
  Tier::all()
    .iter()
    .rev()
    .find(|tier| tier.min_points <= points)
    .unwrap_or(&Tier::all()[0])
    .rank()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn classify_is_deterministic_for_every_tier() {
    for tier in 1..=7 {
      assert_eq!(classify(tier).unwrap(), classify(tier).unwrap());
    }
  }

  #[test]
  fn classify_maps_ends_of_table() {
    assert_eq!(
      classify(1).unwrap(),
      Rank {
        icon: "🥉".to_string(),
        label: "Freshman".to_string(),
        special: false,
      }
    );

    assert_eq!(
      classify(7).unwrap(),
      Rank {
        icon: "🌟".to_string(),
        label: "Legend".to_string(),
        special: true,
      }
    );
  }

  #[test]
  fn classify_rejects_tiers_outside_table() {
    assert_eq!(classify(0), Err(UnknownTierError { tier: 0 }));
    assert_eq!(classify(8), Err(UnknownTierError { tier: 8 }));
  }

  #[test]
  fn only_top_tiers_are_special() {
    let special = Tier::all()
      .iter()
      .filter(|tier| tier.special)
      .map(|tier| tier.label)
      .collect::<Vec<_>>();

    assert_eq!(special, vec!["Master", "Legend"]);
  }

  #[test]
  fn tiers_are_ordered_by_points() {
    assert!(
      Tier::all()
        .windows(2)
        .all(|pair| pair[0].min_points < pair[1].min_points)
    );
  }

  #[test]
  fn classify_points_picks_highest_reached_tier() {
    assert_eq!(classify_points(0).label, "Freshman");
    assert_eq!(classify_points(99).label, "Freshman");
    assert_eq!(classify_points(100).label, "Sophomore");
    assert_eq!(classify_points(2499).label, "Veteran");
    assert_eq!(classify_points(2500).label, "Master");
    assert_eq!(classify_points(u64::MAX).label, "Legend");
  }

  #[test]
  fn default_rank_is_freshman() {
    assert_eq!(Rank::default(), classify(1).unwrap());
  }

  #[test]
  fn with_checked_icon_replaces_non_emoji() {
    let rank = Rank {
      icon: "遅".to_string(),
      label: "Senior".to_string(),
      special: false,
    }
    .with_checked_icon();

    assert_eq!(rank.icon, "🥉");
    assert_eq!(rank.label, "Senior");
  }

  #[test]
  fn with_checked_icon_keeps_emoji() {
    let rank = classify(6).unwrap().with_checked_icon();

    assert_eq!(rank.icon, "👑");
  }
}
