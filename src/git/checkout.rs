//! `git checkout` with fuzzy branch-name fallback.
//!
//! Turns `checkout barnch` into `git checkout branch`, assuming `branch`
//! is a branch. The exact name is tried first; on failure the closest
//! local branch above the similarity threshold is checked out, then a
//! unique substring match, then an interactive `fzf` pick.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::debug;

use crate::git::{matching, GitRepository, SIMILARITY_THRESHOLD};
use crate::utils::settings;

/// Environment variable (or settings key) overriding the fzf executable.
pub const FZF_BIN_VAR: &str = "TOOLBELT_FZF_BIN";

/// How a fallback branch was selected.
enum MatchKind {
    /// Similarity ratio, for the score-based match.
    Similarity(f64),
    /// Unique substring containment.
    Substring,
}

/// Checks out `requested`, falling back to the closest matching branch.
pub fn fuzzy_checkout(requested: &str) -> Result<()> {
    let repo = GitRepository::open()?;
    let workdir = repo.workdir()?;

    // Exact name first; git's own output streams through either way.
    if checkout(&workdir, requested).is_ok() {
        return Ok(());
    }

    debug!("exact checkout of '{requested}' failed, trying fuzzy match");

    let branches = repo.local_branch_names()?;
    if branches.is_empty() {
        anyhow::bail!("No local branches to match '{requested}' against");
    }

    if let Some((best, score)) = matching::best_match(requested, &branches) {
        if score > SIMILARITY_THRESHOLD {
            announce_match(requested, best, &MatchKind::Similarity(score))?;
            return checkout(&workdir, best);
        }
    }

    let candidates = matching::substring_matches(requested, &branches);
    match candidates.as_slice() {
        &[only] => {
            announce_match(requested, only, &MatchKind::Substring)?;
            checkout(&workdir, only)
        }
        &[] => anyhow::bail!("No branch resembling '{requested}' found"),
        _ => {
            let picked = pick_interactive(requested, &branches)?;
            checkout(&workdir, &picked)
        }
    }
}

/// Runs `git -C <workdir> checkout <branch>`, inheriting stdio.
fn checkout(workdir: &Path, branch: &str) -> Result<()> {
    let status = Command::new("git")
        .arg("-C")
        .arg(workdir)
        .args(["checkout", branch])
        .status()
        .context("Failed to execute git checkout")?;

    if !status.success() {
        anyhow::bail!("git checkout '{branch}' failed");
    }

    Ok(())
}

/// Prints `Best match for 'x': 'y' (…)`, candidate in green.
fn announce_match(requested: &str, candidate: &str, kind: &MatchKind) -> Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    write!(stdout, "Best match for '{requested}': ")?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(stdout, "'{candidate}'")?;
    stdout.reset()?;
    writeln!(stdout, " {}", describe(kind))?;

    Ok(())
}

fn describe(kind: &MatchKind) -> String {
    match kind {
        MatchKind::Similarity(score) => format!("({:.1}%)", 100.0 * score),
        MatchKind::Substring => "(by substring)".to_string(),
    }
}

/// Hands the branch list to `fzf`, seeded with the requested name.
fn pick_interactive(requested: &str, branches: &[String]) -> Result<String> {
    let fzf = settings::get_env_var(FZF_BIN_VAR).unwrap_or_else(|_| "fzf".to_string());
    crate::utils::check_fzf(&fzf)?;

    let mut child = Command::new(&fzf)
        .arg(format!("--query={requested}"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to launch '{fzf}'. Is fzf installed?"))?;

    {
        let mut stdin = child
            .stdin
            .take()
            .context("Failed to open fzf stdin")?;
        stdin.write_all(branches.join("\n").as_bytes())?;
    }

    let output = child.wait_with_output().context("fzf did not exit cleanly")?;
    if !output.status.success() {
        anyhow::bail!("No branch selected");
    }

    let picked = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if picked.is_empty() {
        anyhow::bail!("No branch selected");
    }

    Ok(picked)
}
