use std::fs;
use std::io::Read;
use std::path::Path;

use lambda_runtime::Error;

/// Raw JSON text for one local invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDocuments {
    pub event_json: String,
    pub context_json: Option<String>,
}

/// Reads the event from `event_path`, or from `stdin` when no path is given.
/// The context document is optional and only read from a file.
pub fn read_local_documents(
    event_path: Option<&Path>,
    context_path: Option<&Path>,
    mut stdin: impl Read,
) -> Result<LocalDocuments, Error> {
    let event_json = match event_path {
        Some(path) => read_file(path)?,
        None => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .map_err(|error| Error::from(format!("failed to read event from stdin: {error}")))?;
            text
        }
    };
    let context_json = context_path.map(read_file).transpose()?;

    Ok(LocalDocuments {
        event_json,
        context_json,
    })
}

fn read_file(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path)
        .map_err(|error| Error::from(format!("failed to read '{}': {error}", path.display())))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_event_from_stdin_when_no_path_given() {
        let documents = read_local_documents(None, None, Cursor::new(r#"{"query_params": {}}"#))
            .expect("stdin event should be read");

        assert_eq!(documents.event_json, r#"{"query_params": {}}"#);
        assert_eq!(documents.context_json, None);
    }

    #[test]
    fn reads_event_and_context_files() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let event_path = dir.path().join("event.json");
        let context_path = dir.path().join("context.json");
        fs::write(&event_path, r#"{"query_params": {"id": "42"}}"#).expect("write event");
        fs::write(&context_path, r#"{"request_id": "local"}"#).expect("write context");

        let documents = read_local_documents(
            Some(&event_path),
            Some(&context_path),
            Cursor::new("ignored stdin"),
        )
        .expect("files should be read");

        assert_eq!(documents.event_json, r#"{"query_params": {"id": "42"}}"#);
        assert_eq!(
            documents.context_json.as_deref(),
            Some(r#"{"request_id": "local"}"#)
        );
    }

    #[test]
    fn missing_context_file_names_the_path() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let missing = dir.path().join("absent.json");

        let error = read_local_documents(None, Some(&missing), Cursor::new("{}"))
            .expect_err("missing context file should fail");

        assert!(error.to_string().contains("absent.json"));
    }
}
