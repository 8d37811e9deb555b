//! Test helpers for scripted terminal sessions.

use crate::play::{PlayConfig, play_with_config};
use camino::Utf8PathBuf;
use pinpoint_core::RoundConfig;
use std::io::Cursor;
use tempfile::TempDir;

/// Keys that pick every answer of the built-in round.
pub(super) const ANSWER_LABELS: [usize; 7] = [1, 4, 8, 9, 11, 15, 19];

/// Scratch directory plus a play configuration pointing into it.
pub(super) struct Sandbox {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) config: PlayConfig,
}

impl Sandbox {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        let config = PlayConfig {
            name: None,
            round: RoundConfig::default(),
            ranking_dir: root.join("state"),
            round_path: None,
            boundary_path: None,
        };
        Self {
            _dir: dir,
            root,
            config,
        }
    }

    pub(super) fn ranking_file(&self) -> Utf8PathBuf {
        self.config.ranking_dir.join("ranking.json")
    }

    /// Feed `script` to a round and return everything it printed.
    pub(super) fn play(&self, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        play_with_config(&self.config, &mut input, &mut output).expect("round runs");
        String::from_utf8(output).expect("utf-8 output")
    }
}

/// Script that starts as `name`, picks every answer and submits.
pub(super) fn perfect_script(name: &str) -> String {
    let picks: Vec<String> = ANSWER_LABELS.iter().map(ToString::to_string).collect();
    format!("{name}\n{}\nsubmit\n", picks.join("\n"))
}
