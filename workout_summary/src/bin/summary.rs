use std::path::PathBuf;

use workout_summary::read_package;

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Input csv file with sensor packages, one `CODE,reading,..` row per workout
    #[arg(default_value_os_t = std::env::current_dir().unwrap_or_default().join("packages.csv"), required = false)]
    pub input: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Args { input } = <Args as clap::Parser>::parse();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(&input)
        .map_err(|e| format!("Failed to open input file. Reason: {e}"))?;

    for row in reader.records() {
        let row = row.map_err(|e| format!("Failed to read package row. Reason: {e}"))?;

        let mut fields = row.iter();
        let code = fields.next().unwrap_or_default();

        let data = match fields.map(str::parse::<f64>).collect::<Result<Vec<_>, _>>() {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Skipping `{code}` package. Reason: {e}");
                continue;
            }
        };

        match read_package(code, &data) {
            Ok(workout) => println!("{}", workout.summary()),
            Err(e) => eprintln!("Skipping `{code}` package. Reason: {e}"),
        }
    }

    Ok(())
}
