use std::path::Path;

/// Create directory and all necessary parent directories of a given path
pub async fn create_dir_if_not_exists_deep(path: &Path) -> eyre::Result<()> {
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}

/// Read a whole file as a string, `None` if the file doesn't exist
pub async fn read_file_if_exists(path: &Path) -> eyre::Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(eyre::eyre!("Couldn't read file {path:?}: {e}")),
    }
}

/// Write the content next to the destination then move it in place, a reader
/// never observes a partially written document
pub async fn save_file_atomically(path: &Path, content: &str) -> eyre::Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, content.as_bytes()).await?;
    tokio::fs::rename(&tmp_path, path).await?;
    Ok(())
}

pub async fn remove_file_if_exists(path: &Path) -> eyre::Result<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(eyre::eyre!("Couldn't remove file {path:?}: {e}")),
    }
}
