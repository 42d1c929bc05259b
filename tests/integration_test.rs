use anyhow::Result;
use git2::{Repository, Signature};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use toolbelt::git::{matching, GitRepository, SIMILARITY_THRESHOLD};

/// Test setup that creates a temporary git repository with branches
struct TestRepo {
    _temp_dir: TempDir,
    repo_path: PathBuf,
    repo: Repository,
}

impl TestRepo {
    fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let repo_path = temp_dir.path().to_path_buf();

        let repo = Repository::init(&repo_path)?;

        // Configure git user for commits
        let mut config = repo.config()?;
        config.set_str("user.name", "Test User")?;
        config.set_str("user.email", "test@example.com")?;

        Ok(TestRepo {
            _temp_dir: temp_dir,
            repo_path,
            repo,
        })
    }

    fn add_initial_commit(&self) -> Result<git2::Oid> {
        let file_path = self.repo_path.join("test.txt");
        fs::write(&file_path, "Hello, world!")?;

        let mut index = self.repo.index()?;
        index.add_path(std::path::Path::new("test.txt"))?;
        index.write()?;

        let signature = Signature::now("Test User", "test@example.com")?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let commit_id =
            self.repo
                .commit(Some("HEAD"), &signature, &signature, "Initial commit", &tree, &[])?;

        Ok(commit_id)
    }

    fn add_branch(&self, name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo.branch(name, &head, false)?;
        Ok(())
    }
}

#[test]
fn test_local_branch_listing() -> Result<()> {
    let test_repo = TestRepo::new()?;
    test_repo.add_initial_commit()?;
    test_repo.add_branch("branch")?;
    test_repo.add_branch("feature/login")?;

    let repo = GitRepository::open_at(&test_repo.repo_path)?;
    let mut branches = repo.local_branch_names()?;
    branches.sort();

    // The default branch plus the two created ones
    assert_eq!(branches.len(), 3);
    assert!(branches.contains(&"branch".to_string()));
    assert!(branches.contains(&"feature/login".to_string()));

    Ok(())
}

#[test]
fn test_current_branch_name() -> Result<()> {
    let test_repo = TestRepo::new()?;
    test_repo.add_initial_commit()?;

    let repo = GitRepository::open_at(&test_repo.repo_path)?;
    let current = repo.current_branch()?;

    // git2 init defaults vary between main and master
    assert!(current == "main" || current == "master", "was {current}");

    Ok(())
}

#[test]
fn test_workdir_resolves_to_repo_path() -> Result<()> {
    let test_repo = TestRepo::new()?;
    test_repo.add_initial_commit()?;

    let repo = GitRepository::open_at(&test_repo.repo_path)?;
    let workdir = repo.workdir()?;

    assert_eq!(workdir.canonicalize()?, test_repo.repo_path.canonicalize()?);

    Ok(())
}

#[test]
fn test_fuzzy_match_against_real_branch_list() -> Result<()> {
    let test_repo = TestRepo::new()?;
    test_repo.add_initial_commit()?;
    test_repo.add_branch("branch")?;
    test_repo.add_branch("develop")?;

    let repo = GitRepository::open_at(&test_repo.repo_path)?;
    let branches = repo.local_branch_names()?;

    // Typo "barnch" must resolve to "branch" above the acceptance threshold
    let (best, score) = matching::best_match("barnch", &branches)
        .ok_or_else(|| anyhow::anyhow!("no match returned"))?;
    assert_eq!(best, "branch");
    assert!(score > SIMILARITY_THRESHOLD, "score was {score}");

    Ok(())
}

#[test]
fn test_substring_fallback_against_real_branch_list() -> Result<()> {
    let test_repo = TestRepo::new()?;
    test_repo.add_initial_commit()?;
    test_repo.add_branch("feature/payments")?;
    test_repo.add_branch("feature/login")?;

    let repo = GitRepository::open_at(&test_repo.repo_path)?;
    let branches = repo.local_branch_names()?;

    let matches = matching::substring_matches("PAYMENTS", &branches);
    assert_eq!(matches, vec!["feature/payments"]);

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_displayplacer_failure_carries_stderr() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    use toolbelt::display::Displayplacer;

    // Stand in for displayplacer with a script that fails loudly
    let temp_dir = tempfile::tempdir()?;
    let stub = temp_dir.path().join("displayplacer-stub");
    fs::write(&stub, "#!/bin/sh\necho 'could not detect displays' >&2\nexit 1\n")?;
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755))?;

    let placer = Displayplacer::with_bin(stub.to_string_lossy());
    let err = placer.list().unwrap_err();
    assert!(
        err.to_string().contains("could not detect displays"),
        "error should carry the tool's stderr, was: {err}"
    );

    Ok(())
}

#[test]
fn test_s3_uri_accepts_zero_urls() {
    use clap::Parser;
    use toolbelt::cli::{Cli, Commands};

    let cli = Cli::try_parse_from(["toolbelt", "s3", "uri"]).expect("zero URLs must parse");
    match cli.command {
        Commands::S3(s3) => assert!(s3.execute().is_ok()),
        _ => panic!("expected s3 subcommand"),
    }
}

#[test]
fn test_cli_parses_all_subcommands() {
    use clap::Parser;
    use toolbelt::cli::{Cli, Commands};

    let cli = Cli::parse_from(["toolbelt", "git", "checkout", "barnch"]);
    assert!(matches!(cli.command, Commands::Git(_)));

    let cli = Cli::parse_from(["toolbelt", "display", "arrange", "right", "--debug"]);
    assert!(cli.debug);
    assert!(matches!(cli.command, Commands::Display(_)));

    let cli = Cli::parse_from(["toolbelt", "s3", "uri", "a/b", "c/d"]);
    match cli.command {
        Commands::S3(s3) => match s3.command {
            toolbelt::cli::s3::S3Subcommands::Uri(uri) => {
                assert_eq!(uri.urls, vec!["a/b", "c/d"]);
            }
        },
        _ => panic!("expected s3 subcommand"),
    }
}
