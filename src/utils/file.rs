use std::fs;
use std::io;
use std::path::Path;

/// Checks if a file exists at the given path
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// Read a whole file as UTF-8 text.
///
/// `-` reads standard input instead, so scan dumps can be piped in.
pub fn file_get<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let path = path.as_ref();
    if path == Path::new("-") {
        return io::read_to_string(io::stdin());
    }
    if !file_exists(path) {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        ));
    }
    fs::read_to_string(path)
}
