use std::path::Path;

use tokio::fs;

/// Read a UTF-8 file.
pub async fn read_to_string(path: impl AsRef<Path>) -> std::io::Result<String> {
    fs::read_to_string(path).await
}

/// Write `contents` to `path`, creating parent directories as needed.
pub async fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, contents).await
}

/// Whether `path` exists and is a regular file.
pub async fn file_exists(path: impl AsRef<Path>) -> std::io::Result<bool> {
    match fs::metadata(path).await {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Copy the contents of `from` into `to`, returning how many files were copied.
pub async fn copy_dir(from: impl AsRef<Path>, to: impl AsRef<Path>) -> std::io::Result<usize> {
    let mut pending = vec![(from.as_ref().to_path_buf(), to.as_ref().to_path_buf())];
    let mut copied = 0;
    while let Some((source, target)) = pending.pop() {
        fs::create_dir_all(&target).await?;
        let mut entries = fs::read_dir(&source).await?;
        while let Some(entry) = entries.next_entry().await? {
            let destination = target.join(entry.file_name());
            if entry.file_type().await?.is_dir() {
                pending.push((entry.path(), destination));
            } else {
                fs::copy(entry.path(), destination).await?;
                copied += 1;
            }
        }
    }
    Ok(copied)
}
