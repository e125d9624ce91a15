use clap::Parser;
use resume_tuner::cli::{self, Args};
use resume_tuner::domain::DocumentKind;
use resume_tuner::infrastructure::{build_agent, build_matcher, AppConfig};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    dotenvy::dotenv().ok();

    let default_filter = if args.verbose {
        "resume_tuner=debug"
    } else {
        "resume_tuner=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut app = AppConfig::load(args.config.as_deref(), args.prompts.as_deref())?;
    if let Some(iterations) = args.iterations {
        app.config.improvement.max_iterations = iterations;
    }
    if let Some(target) = args.target_score {
        app.config.improvement.target_score = target;
    }

    let resume = cli::read_document(
        args.resume.as_deref(),
        DocumentKind::Resume,
        "Paste resume text and press Ctrl-D when done:",
    )?;
    let jd = cli::read_document(
        args.jd.as_deref(),
        DocumentKind::JobDescription,
        "Paste job description text and press Ctrl-D when done:",
    )?;

    let matcher = Arc::new(build_matcher(&app)?);
    info!(
        llm = ?app.config.llm.provider,
        embedding = ?app.config.embedding.provider,
        "backends initialized"
    );

    let output = if args.match_only {
        let report = matcher.match_resume(resume.text(), jd.text()).await?;
        if args.json {
            cli::render_json(&report)?
        } else {
            cli::render_match(&report)
        }
    } else {
        let agent = build_agent(matcher, &app);
        let outcome = agent.run(resume.text(), jd.text()).await?;
        if args.json {
            cli::render_json(&outcome)?
        } else {
            cli::render_outcome(&outcome)
        }
    };

    println!("{output}");
    Ok(())
}
