use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "resume-tuner", version)]
#[command(about = "Score a resume against a job description and tune it until it matches")]
pub struct Args {
    /// Resume text file; read from stdin when omitted
    #[arg(long)]
    pub resume: Option<PathBuf>,

    /// Job description text file; read from stdin when omitted
    #[arg(long)]
    pub jd: Option<PathBuf>,

    /// Maximum improvement iterations [default: 3, or as configured]
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Stop once the resume scores at least this much (0-100)
    #[arg(long)]
    pub target_score: Option<f64>,

    /// Only score the resume and suggest improvements, without rewriting
    #[arg(long)]
    pub match_only: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// YAML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// YAML file overriding the prompt templates
    #[arg(long)]
    pub prompts: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["resume-tuner"]).unwrap();

        assert!(args.iterations.is_none());
        assert!(args.resume.is_none());
        assert!(args.jd.is_none());
        assert!(args.target_score.is_none());
        assert!(!args.match_only);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "resume-tuner",
            "--resume",
            "cv.txt",
            "--jd",
            "job.txt",
            "--iterations",
            "5",
            "--target-score",
            "85.5",
            "--json",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.resume, Some(PathBuf::from("cv.txt")));
        assert_eq!(args.jd, Some(PathBuf::from("job.txt")));
        assert_eq!(args.iterations, Some(5));
        assert_eq!(args.target_score, Some(85.5));
        assert!(args.json);
        assert!(args.verbose);
    }

    #[test]
    fn test_rejects_negative_iterations() {
        assert!(Args::try_parse_from(["resume-tuner", "--iterations", "-1"]).is_err());
    }
}
