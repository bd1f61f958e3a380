use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use anyhow::{Context, bail};
use chrono::Utc;
use potato_config::UploadConfig;
use potato_core::entities::Proof;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    scenario: i64,
    step: u32,
    file: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let proof = upload(scenario, step, Path::new(file), ctx).await?;
    output(&proof, flags.format)
}

/// Attempts at a free `<stem>_<ms>[_n].<ext>` name before giving up.
const MAX_NAME_ATTEMPTS: u32 = 100;

/// Copy `source` into the upload directory and record it against the step.
/// The copy is removed again if the proof row cannot be written.
async fn upload(scenario: i64, step: u32, source: &Path, ctx: &AppContext) -> anyhow::Result<Proof> {
    let uploads = &ctx.config.uploads;
    let (stem, ext) = upload_name_parts(source, uploads)?;

    let size = std::fs::metadata(source)
        .with_context(|| format!("cannot read {}", source.display()))?
        .len();
    if size > uploads.max_bytes {
        bail!(
            "{} is {size} bytes; the upload limit is {} bytes",
            source.display(),
            uploads.max_bytes
        );
    }

    // Fail on an unknown scenario before anything lands on disk.
    ctx.db.get_scenario(scenario).await?;

    let dir = Path::new(&uploads.dir);
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create upload directory {}", uploads.dir))?;
    let (mut file, stored_name) = claim_target(dir, &stem, &ext, Utc::now().timestamp_millis())?;
    let target = dir.join(&stored_name);

    let copied = File::open(source)
        .and_then(|mut reader| io::copy(&mut reader, &mut file))
        .with_context(|| format!("failed to copy {} to {}", source.display(), target.display()));
    drop(file);
    if let Err(error) = copied {
        remove_orphan(&target);
        return Err(error);
    }

    match ctx.db.add_proof(scenario, step, &stored_name).await {
        Ok(proof) => {
            tracing::info!(scenario, step, file = %stored_name, size, "proof uploaded");
            Ok(proof)
        }
        Err(error) => {
            remove_orphan(&target);
            Err(error.into())
        }
    }
}

fn remove_orphan(target: &Path) {
    if let Err(cleanup) = std::fs::remove_file(target) {
        tracing::warn!(path = %target.display(), %cleanup, "failed to remove orphaned upload");
    }
}

/// Create a file that did not exist before, as `<stem>_<millis>.<ext>` or,
/// when that is taken, `<stem>_<millis>_<n>.<ext>`. Never overwrites.
fn claim_target(dir: &Path, stem: &str, ext: &str, millis: i64) -> anyhow::Result<(File, String)> {
    for attempt in 0..MAX_NAME_ATTEMPTS {
        let name = if attempt == 0 {
            format!("{stem}_{millis}.{ext}")
        } else {
            format!("{stem}_{millis}_{attempt}.{ext}")
        };
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(dir.join(&name))
        {
            Ok(file) => return Ok((file, name)),
            Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {}
            Err(error) => {
                return Err(error).with_context(|| format!("failed to create {}", dir.join(&name).display()));
            }
        }
    }
    bail!(
        "no free upload name for {stem}_{millis}.{ext} in {}",
        dir.display()
    )
}

/// Sanitized stem and lowercased extension, after checking the extension
/// against the allow list.
fn upload_name_parts(source: &Path, uploads: &UploadConfig) -> anyhow::Result<(String, String)> {
    let file_name = source
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("{} has no usable file name", source.display()))?;
    if !uploads.is_allowed(file_name) {
        bail!(
            "file type not allowed: {file_name} (allowed: {})",
            uploads.allowed_extensions.join(", ")
        );
    }

    let path = Path::new(file_name);
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(sanitize_stem)
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| String::from("proof"));

    Ok((stem, ext))
}

fn sanitize_stem(stem: &str) -> String {
    stem.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use potato_config::PotatoConfig;
    use potato_core::entities::NewScenario;

    use super::*;

    async fn context(uploads: &Path) -> AppContext {
        let mut config = PotatoConfig::default();
        config.database.path = ":memory:".into();
        config.uploads.dir = uploads.to_string_lossy().into_owned();
        config.uploads.max_bytes = 64;
        AppContext::init(config).await.unwrap()
    }

    async fn scenario(ctx: &AppContext) -> i64 {
        let input = NewScenario {
            name: "Checkout flow".into(),
            area: "Payment".into(),
            scenario_type: "Functional".into(),
            assigned_to: "Jane Smith".into(),
        };
        ctx.db.create_scenario(&input, 3).await.unwrap().id
    }

    #[test]
    fn sanitizes_stem() {
        assert_eq!(sanitize_stem("login screen (1)"), "login_screen__1_");
        assert_eq!(sanitize_stem("run-42_ok"), "run-42_ok");
    }

    #[test]
    fn name_parts_lowercase_extension() {
        let uploads = UploadConfig::default();
        let (stem, ext) = upload_name_parts(Path::new("/tmp/Login Shot.PNG"), &uploads).unwrap();
        assert_eq!(stem, "Login_Shot");
        assert_eq!(ext, "png");
    }

    #[test]
    fn rejects_disallowed_extension() {
        let uploads = UploadConfig::default();
        let err = upload_name_parts(Path::new("payload.exe"), &uploads).unwrap_err();
        assert!(err.to_string().contains("not allowed"));
    }

    #[test]
    fn claim_target_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shot_1700000000000.png"), "first").unwrap();

        let (_, second) = claim_target(dir.path(), "shot", "png", 1_700_000_000_000).unwrap();
        let (_, third) = claim_target(dir.path(), "shot", "png", 1_700_000_000_000).unwrap();

        assert_eq!(second, "shot_1700000000000_1.png");
        assert_eq!(third, "shot_1700000000000_2.png");
        assert_eq!(
            std::fs::read_to_string(dir.path().join("shot_1700000000000.png")).unwrap(),
            "first"
        );
    }

    #[tokio::test]
    async fn upload_copies_file_and_records_proof() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploads");
        let ctx = context(&uploads).await;
        let id = scenario(&ctx).await;

        let source = dir.path().join("result.txt");
        std::fs::write(&source, "step 2 passed").unwrap();

        let proof = upload(id, 2, &source, &ctx).await.unwrap();
        assert_eq!(proof.step_number, 2);
        assert_eq!(
            std::fs::read_to_string(uploads.join(&proof.filename)).unwrap(),
            "step 2 passed"
        );
        assert_eq!(ctx.db.list_proofs(id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn same_file_twice_gets_two_stored_copies() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploads");
        let ctx = context(&uploads).await;
        let id = scenario(&ctx).await;

        let source = dir.path().join("result.txt");
        std::fs::write(&source, "ok").unwrap();

        let first = upload(id, 1, &source, &ctx).await.unwrap();
        let second = upload(id, 1, &source, &ctx).await.unwrap();

        assert_ne!(first.filename, second.filename);
        assert!(uploads.join(&first.filename).is_file());
        assert!(uploads.join(&second.filename).is_file());
    }

    #[tokio::test]
    async fn oversized_file_is_rejected_before_copy() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploads");
        let ctx = context(&uploads).await;
        let id = scenario(&ctx).await;

        let source = dir.path().join("big.txt");
        std::fs::write(&source, vec![b'x'; 65]).unwrap();

        let err = upload(id, 1, &source, &ctx).await.unwrap_err();
        assert!(err.to_string().contains("upload limit"));
        assert!(!uploads.exists());
    }

    #[tokio::test]
    async fn unknown_scenario_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploads");
        let ctx = context(&uploads).await;

        let source = dir.path().join("note.txt");
        std::fs::write(&source, "x").unwrap();

        assert!(upload(999, 1, &source, &ctx).await.is_err());
        assert!(!uploads.exists());
    }
}
