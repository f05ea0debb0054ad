use argh::FromArgs;
use std::path::PathBuf;
use zipf_rank_plot::analysis::constants::{
    DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_SUMMARY_ROWS,
};
use zipf_rank_plot::config::{parse_delimiter, ConfigError, PipelineConfig};

/// Plot a term-frequency table against Zipf's law on log-log axes
#[derive(FromArgs, Debug)]
struct Args {
    /// delimited frequency table with a 'frequency' column (default: freq.csv)
    #[argh(option, short = 'i', default = "PathBuf::from(DEFAULT_INPUT_FILE)")]
    input: PathBuf,

    /// image to write (default: zipf_distribution.png)
    #[argh(option, short = 'o', default = "PathBuf::from(DEFAULT_OUTPUT_FILE)")]
    output: PathBuf,

    /// field separator (default: ;)
    #[argh(option, short = 'd', default = "';'")]
    delimiter: char,

    /// number of ranks to print, 0 to disable (default: 10)
    #[argh(option, short = 't', default = "DEFAULT_SUMMARY_ROWS")]
    top: usize,

    /// also write the ranked table with theoretical values to this file
    #[argh(option, short = 'r')]
    ranked_output: Option<PathBuf>,

    /// text file to count into the frequency table before plotting; repeat for
    /// several files (the table is written to --input)
    #[argh(option, short = 'c')]
    corpus: Vec<PathBuf>,

    /// do not open the image in a viewer
    #[argh(switch, short = 'n')]
    no_show: bool,
}

impl Args {
    fn into_config(self) -> Result<PipelineConfig, ConfigError> {
        let config = PipelineConfig {
            input: self.input,
            output: self.output,
            delimiter: parse_delimiter(self.delimiter)?,
            top: self.top,
            ranked_output: self.ranked_output,
            show: !self.no_show,
            corpus: self.corpus,
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let result = args
        .into_config()
        .map_err(zipf_rank_plot::ZipfPlotError::from)
        .and_then(|config| zipf_rank_plot::run(&config));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
