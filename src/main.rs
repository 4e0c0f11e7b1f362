use {
  anyhow::Context,
  comment_card::{Comment, CommentRecord, CommentRenderer, RenderConfig},
  crossterm::style::Stylize,
  log::Level,
  serde::Deserialize,
  std::{
    backtrace::BacktraceStatus,
    env, fs,
    io::{self, IsTerminal, Read},
    process,
    str::FromStr,
  },
};

const LOG_LEVEL_VAR: &str = "COMMENT_CARD_LOG";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

#[derive(Deserialize)]
#[serde(untagged)]
enum Input {
  Many(Vec<CommentRecord>),
  One(CommentRecord),
}

impl Input {
  fn into_records(self) -> Vec<CommentRecord> {
    match self {
      Self::Many(records) => records,
      Self::One(record) => vec![record],
    }
  }
}

fn initialize_logging() -> Result {
  let level = match env::var(LOG_LEVEL_VAR) {
    Ok(value) => Level::from_str(value.trim()).with_context(|| {
      format!("invalid log level `{value}` for {LOG_LEVEL_VAR}")
    })?,
    Err(_) => Level::Info,
  };

  simple_logger::init_with_level(level).context("could not initialize logging")
}

fn read_input() -> Result<String> {
  match env::args_os().nth(1) {
    Some(path) => fs::read_to_string(&path).with_context(|| {
      format!("could not read comments from {}", path.to_string_lossy())
    }),
    None => {
      let mut buffer = String::new();

      io::stdin()
        .read_to_string(&mut buffer)
        .context("could not read comments from stdin")?;

      Ok(buffer)
    }
  }
}

fn run() -> Result {
  initialize_logging()?;

  let renderer = CommentRenderer::new(
    RenderConfig::from_env().context("could not load render configuration")?,
  );

  let records = serde_json::from_str::<Input>(&read_input()?)
    .context("could not parse comment records")?
    .into_records();

  log::info!("rendering {} comment(s)", records.len());

  let mut blocks = Vec::with_capacity(records.len());

  for (position, record) in records.into_iter().enumerate() {
    let index = record.index;

    let comment = Comment::try_from(record).with_context(|| {
      format!("comment #{index} at position {position} is invalid")
    })?;

    blocks.push(
      renderer
        .render(&comment)
        .with_context(|| format!("could not render comment #{index}"))?,
    );
  }

  println!("{}", blocks.join("\n\n"));

  Ok(())
}

fn main() {
  if let Err(error) = run() {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
