// File round-trip benchmark: write a repeated sentence to a scratch file,
// read it back, tokenize, filter, sort, delete.

use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rand::Rng;

pub const SENTENCE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
pub const REPEATS: usize = 1000;

/// Tokens must be strictly longer than this (in bytes) to be kept.
pub const MIN_TOKEN_LEN: usize = 5;

/// `dir/benchmark_<32 hex digits>.txt`
pub fn scratch_path(dir: &Path) -> PathBuf {
    let id: [u8; 16] = rand::thread_rng().r#gen();
    let hex: String = id.iter().map(|b| format!("{:02x}", b)).collect();
    dir.join(format!("benchmark_{}.txt", hex))
}

pub fn payload(sentence: &str, repeats: usize) -> String {
    sentence.repeat(repeats)
}

/// Temporary file owned by a single run. Dropping it deletes the file,
/// so early returns and panics cannot leave it behind.
pub struct ScratchFile {
    path: PathBuf,
    removed: bool,
}

impl ScratchFile {
    /// Picks a fresh random name under `dir`. Nothing touches disk until `write`.
    pub fn create(dir: &Path) -> Self {
        ScratchFile { path: scratch_path(dir), removed: false }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, contents: &str) -> io::Result<()> {
        fs::write(&self.path, contents)
    }

    pub fn read(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }

    pub fn remove(mut self) -> io::Result<()> {
        self.removed = true;
        fs::remove_file(&self.path)
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if !self.removed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Splits on single spaces; consecutive or trailing spaces yield empty tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(' ').collect()
}

pub fn long_tokens<'a>(tokens: &[&'a str], min_len: usize) -> Vec<&'a str> {
    tokens.iter().copied().filter(|t| t.len() > min_len).collect()
}

pub fn sort_tokens(mut tokens: Vec<&str>) -> Vec<&str> {
    tokens.sort();
    tokens
}

/// Outcome of one round trip. `path` no longer exists when this is returned.
pub struct RoundTrip {
    pub path: PathBuf,
    pub payload_len: usize,
    pub token_count: usize,
    pub kept: Vec<String>,
    pub elapsed: Duration,
}

pub fn round_trip(dir: &Path) -> Result<RoundTrip, Box<dyn Error>> {
    let start = Instant::now();

    let scratch = ScratchFile::create(dir);
    let data = payload(SENTENCE, REPEATS);
    scratch.write(&data)?;

    let content = scratch.read()?;
    let tokens = tokenize(&content);
    let token_count = tokens.len();
    let kept = sort_tokens(long_tokens(&tokens, MIN_TOKEN_LEN));
    let kept: Vec<String> = kept.into_iter().map(str::to_string).collect();

    let path = scratch.path().to_path_buf();
    scratch.remove()?;

    Ok(RoundTrip {
        path,
        payload_len: content.len(),
        token_count,
        kept,
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = fs::create_dir_all(&dir);
        dir
    }

    #[test]
    fn scratch_names_are_random_hex() {
        let dir = Path::new("/tmp");
        let a = scratch_path(dir);
        let b = scratch_path(dir);
        assert_ne!(a, b);

        let name = a.file_name().unwrap().to_str().unwrap();
        let hex = name.strip_prefix("benchmark_").unwrap().strip_suffix(".txt").unwrap();
        assert_eq!(hex.len(), 32);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn payload_length() {
        assert_eq!(SENTENCE.len(), 57);
        assert_eq!(payload(SENTENCE, REPEATS).len(), REPEATS * SENTENCE.len());
        assert_eq!(payload("ab ", 3), "ab ab ab ");
    }

    #[test]
    fn tokenize_keeps_empty_tokens() {
        assert_eq!(tokenize("a  b "), vec!["a", "", "b", ""]);
    }

    #[test]
    fn filter_and_sort() {
        let tokens = tokenize("zebras apples amet, abcdef zebras five5 sixsix");
        let kept = sort_tokens(long_tokens(&tokens, MIN_TOKEN_LEN));
        assert_eq!(kept, vec!["abcdef", "apples", "sixsix", "zebras", "zebras"]);
    }

    #[test]
    fn round_trip_cleans_up() {
        let dir = test_dir("file_io_round_trip");
        let result = round_trip(&dir).unwrap();

        assert!(!result.path.exists());
        assert!(result.path.starts_with(&dir));
        assert_eq!(result.payload_len, 57_000);
        // 8 words per sentence plus the empty token after the final space
        assert_eq!(result.token_count, 8 * REPEATS + 1);

        assert_eq!(result.kept.len(), 2 * REPEATS);
        assert!(result.kept.iter().all(|t| t.len() > MIN_TOKEN_LEN));
        assert!(result.kept.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(result.kept.first().map(String::as_str), Some("adipiscing"));
        assert_eq!(result.kept.last().map(String::as_str), Some("consectetur"));

        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn round_trip_fails_on_missing_dir() {
        let missing = Path::new("/nonexistent/file_io_bench");
        assert!(round_trip(missing).is_err());
    }

    #[test]
    fn scratch_file_removed_on_drop() {
        let dir = test_dir("file_io_drop");
        let path = {
            let scratch = ScratchFile::create(&dir);
            scratch.write("temporary").unwrap();
            assert!(scratch.path().exists());
            scratch.path().to_path_buf()
        };
        assert!(!path.exists());
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn scratch_file_removed_on_panic() {
        let dir = test_dir("file_io_panic");
        let scratch = ScratchFile::create(&dir);
        let path = scratch.path().to_path_buf();

        let outcome = std::panic::catch_unwind(move || {
            scratch.write("half done").unwrap();
            panic!("benchmark aborted");
        });

        assert!(outcome.is_err());
        assert!(!path.exists());
        let _ = fs::remove_dir(&dir);
    }
}
