//! Writes a tile history response to a JSON file named after its region.

use camino::{Utf8Path, Utf8PathBuf};
use canvas_client::region::Region;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::utils::effect::write_file::WriteFile;

const INDENT: &[u8] = b"    ";

#[derive(thiserror::Error, Debug)]
pub enum PersistError {
    #[error("could not render the response as JSON")]
    Serialize(#[from] serde_json::Error),

    #[error("could not write the response to {path}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// `start_{sx}_{sy}-end_{ex}_{ey}.json`. The same region always maps to the same name.
pub fn output_file_name(region: &Region) -> String {
    let (start, end) = (region.start(), region.end());
    format!(
        "start_{}_{}-end_{}_{}.json",
        start.x, start.y, end.x, end.y
    )
}

/// Renders `value` with four-space indentation.
pub fn to_pretty_json(value: &Value) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

pub struct ResultPersister<W> {
    output_dir: Utf8PathBuf,
    writer: W,
}

impl<W: WriteFile> ResultPersister<W> {
    pub fn new(output_dir: impl Into<Utf8PathBuf>, writer: W) -> ResultPersister<W> {
        ResultPersister {
            output_dir: output_dir.into(),
            writer,
        }
    }

    pub fn output_dir(&self) -> &Utf8Path {
        &self.output_dir
    }

    /// The file is created if absent and truncated if present.
    pub async fn persist(&self, region: &Region, data: &Value) -> Result<Utf8PathBuf, PersistError> {
        let path = self.output_dir.join(output_file_name(region));
        let contents = to_pretty_json(data)?;
        tracing::debug!(%path, bytes = contents.len(), "writing tile history");
        self.writer
            .write_file(&path, &contents)
            .await
            .map_err(|err| PersistError::Write {
                path: path.clone(),
                source: Box::new(err),
            })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use assert_fs::TempDir;
    use canvas_client::region::Coordinate;
    use mockall::predicate;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use serde_json::json;
    use speculoos::prelude::*;

    use super::*;
    use crate::utils::effect::write_file::{FsWriteFile, MockWriteFile, MockWriteFileError};

    #[fixture]
    fn region() -> Region {
        Region::new(Coordinate::new(0, 0), Coordinate::new(1, 1))
    }

    #[rstest]
    #[case::origin(Region::new(Coordinate::new(0, 0), Coordinate::new(1, 1)), "start_0_0-end_1_1.json")]
    #[case::negative(Region::new(Coordinate::new(-5, 2), Coordinate::new(3, -1)), "start_-5_2-end_3_-1.json")]
    fn it_names_files_after_the_region(#[case] region: Region, #[case] expected: &str) {
        assert_that!(output_file_name(&region)).is_equal_to(expected.to_string());
    }

    #[test]
    fn it_indents_with_four_spaces() {
        let rendered = to_pretty_json(&json!({ "a": { "b": 1 } })).unwrap();

        assert_eq!(
            String::from_utf8(rendered).unwrap(),
            "{\n    \"a\": {\n        \"b\": 1\n    }\n}"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_hands_the_rendered_json_to_the_writer(region: Region) {
        let data = json!({ "inputAct0": null });
        let expected_path = Utf8PathBuf::from("out/start_0_0-end_1_1.json");
        let expected_contents = to_pretty_json(&data).unwrap();

        let mut writer = MockWriteFile::new();
        writer
            .expect_write_file()
            .with(
                predicate::eq(expected_path.clone()),
                predicate::eq(expected_contents),
            )
            .times(1)
            .returning(|_, _| Ok(()));

        let persister = ResultPersister::new("out", writer);
        let path = persister.persist(&region, &data).await;

        assert_that!(path).is_ok().is_equal_to(expected_path);
    }

    #[rstest]
    #[tokio::test]
    async fn write_failures_propagate(region: Region) {
        let mut writer = MockWriteFile::new();
        writer
            .expect_write_file()
            .times(1)
            .returning(|_, _| Err(MockWriteFileError {}));

        let persister = ResultPersister::new("out", writer);
        let result = persister.persist(&region, &json!({})).await;

        assert_that!(result)
            .is_err()
            .matches(|err| matches!(err, PersistError::Write { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn persisting_twice_overwrites_the_same_file(region: Region) {
        let dir = TempDir::new().unwrap();
        let output_dir = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let persister = ResultPersister::new(output_dir.join("nested"), FsWriteFile::default());

        let first = persister
            .persist(&region, &json!({ "attempt": "first, and a good deal longer" }))
            .await
            .unwrap();
        let second = persister
            .persist(&region, &json!({ "attempt": 2 }))
            .await
            .unwrap();

        assert_that!(first).is_equal_to(&second);
        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&second).unwrap()).unwrap();
        assert_eq!(written, json!({ "attempt": 2 }));
    }
}
