use std::path::{Path, PathBuf};

use kognit_core::models::export::AssessmentExport;
use kognit_core::models::subject::{Sex, SubjectProfile};
use kognit_cli::config::{self, KognitConfig};
use kognit_cli::script::{self, ReplayScript, ScoreInput};
use kognit_session::Session;
use kognit_session::sequencer::plan_steps;
use kognit_subtests::rng::RngHandle;

pub fn plan(age: u32, can_read: Option<bool>, can_count: Option<bool>) -> eyre::Result<()> {
    let profile = SubjectProfile::new(age, Sex::default()).with_capabilities(can_read, can_count);
    let steps = plan_steps(&profile);
    println!(
        "{} steps for age {age} ({})",
        steps.len(),
        profile.age_group().as_str()
    );
    for (index, step) in steps.iter().enumerate() {
        let metric = step.metric().map(|m| m.as_str()).unwrap_or("-");
        println!("{:>2}. {:<20} {metric}", index + 1, step.name());
    }
    Ok(())
}

pub fn score(config_path: &Path, input: &Path, out: Option<PathBuf>) -> eyre::Result<()> {
    let config = config::load_or_default(config_path)?;
    let input: ScoreInput = read_json(input)?;

    let mut session = open_session(&config, input.subject.clone(), config.seed)?;
    let imported = session.import_scores(&input.entries())?;
    session.set_notes(input.notes);
    tracing::info!(imported, "scores imported");

    println!("{}", session.structured_text());
    write_export(&session.export(jiff::Timestamp::now()), out, &config)
}

pub fn replay(config_path: &Path, script_path: &Path, out: Option<PathBuf>) -> eyre::Result<()> {
    let config = config::load_or_default(config_path)?;
    let recorded: ReplayScript = read_json(script_path)?;

    let seed = recorded.seed.or(config.seed);
    let mut session = open_session(&config, recorded.subject.clone(), seed)?;
    script::replay(&mut session, &recorded.events);
    tracing::info!(
        events = recorded.events.len(),
        step = session.current_step().name(),
        "replay finished"
    );

    println!("{}", session.structured_text());
    write_export(&session.export(jiff::Timestamp::now()), out, &config)
}

pub fn config_show(config_path: &Path) -> eyre::Result<()> {
    let config = config::load_or_default(config_path)?;
    println!("# {}", config_path.display());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn config_init(config_path: &Path, force: bool) -> eyre::Result<()> {
    if config_path.exists() && !force {
        return Err(eyre::eyre!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        ));
    }
    config::save_config(config_path, &KognitConfig::default())?;
    println!("wrote {}", config_path.display());
    Ok(())
}

fn open_session(
    config: &KognitConfig,
    subject: SubjectProfile,
    seed: Option<u64>,
) -> eyre::Result<Session> {
    let rng = match seed {
        Some(seed) => RngHandle::from_seed(seed),
        None => RngHandle::from_entropy(),
    };
    Ok(Session::with_battery(
        subject,
        rng,
        &config.battery,
        config.administration.clone(),
    )?)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> eyre::Result<T> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("failed to parse {}: {e}", path.display()))
}

fn write_export(
    export: &AssessmentExport,
    out: Option<PathBuf>,
    config: &KognitConfig,
) -> eyre::Result<()> {
    let dir = out
        .or_else(|| config.export_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(export.file_name());
    std::fs::write(&path, export.to_json_pretty()?)?;
    tracing::info!(path = %path.display(), "export written");
    println!("wrote {}", path.display());
    Ok(())
}
