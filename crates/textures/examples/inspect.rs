use std::{
  env, fs, io,
  path::{Path, PathBuf},
};

use snafu::{ResultExt, Snafu, ensure};
use tex2d_library::{ContainerFormat, OwnedTexture, ParseError};
use tex2d_textures::{TextureReader, samples};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Snafu)]
enum InspectError {
  #[snafu(display("failed to read {}", path.display()))]
  Read { path: PathBuf, source: io::Error },
  #[snafu(display("failed to parse {}", path.display()))]
  Parse { path: PathBuf, source: ParseError },
  #[snafu(display("{count} of {total} files could not be inspected"))]
  Failed { count: usize, total: usize },
}

fn inspect(path: &Path) -> Result<(), InspectError> {
  let format = ContainerFormat::from_path(path).context(ParseSnafu { path })?;
  let data = fs::read(path).context(ReadSnafu { path })?;
  let owned = OwnedTexture::parse(data, format).context(ParseSnafu { path })?;
  let texture = owned.texture();

  info!(
    path = %path.display(),
    %format,
    width = texture.width,
    height = texture.height,
    payload = ?texture.payload_range(),
    "parsed texture"
  );

  let Some(case) = path
    .file_name()
    .and_then(|name| name.to_str())
    .and_then(samples::find)
  else {
    return Ok(());
  };

  let actual = owned.compressed_data().len();
  match case.codec.compressed_size(owned.width(), owned.height()) {
    Some(expected) if expected != actual => warn!(
      codec = %case.codec,
      expected,
      actual,
      "payload size does not match the codec's block layout"
    ),
    Some(_) => info!(codec = %case.codec, "payload matches the codec's block layout"),
    None => info!(codec = %case.codec, actual, "codec streams have no fixed size"),
  }

  Ok(())
}

#[snafu::report]
fn main() -> Result<(), InspectError> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let paths: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();
  let mut count = 0usize;
  for path in &paths {
    if let Err(error) = inspect(path) {
      error!(%error, "skipping file");
      count += 1;
    }
  }

  ensure!(count == 0, FailedSnafu { count, total: paths.len() });
  Ok(())
}
