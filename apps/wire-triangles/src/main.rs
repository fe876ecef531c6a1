use clap::Parser;
use math::{count_singular_perimeters, count_singular_perimeters_parallel};

#[derive(Parser)]
#[command(name = "wire-triangles")]
#[command(about = "Count wire lengths forming exactly one integer right triangle")]
struct Cli {
    /// Largest wire length (perimeter) to consider
    #[arg(short, long, default_value_t = 1_500_000)]
    max_perimeter: u64,

    /// Partition the search across rayon workers
    #[arg(short, long)]
    parallel: bool,
}

fn main() {
    let cli = Cli::parse();

    let result = if cli.parallel {
        count_singular_perimeters_parallel(cli.max_perimeter)
    } else {
        count_singular_perimeters(cli.max_perimeter)
    };

    match result {
        Ok(count) => {
            println!(
                "Number of distinct perimeters (<= {}) forming exactly one integer right triangle:",
                cli.max_perimeter
            );
            println!("  {}", count);
        }
        Err(e) => eprintln!("error: {}", e),
    }
}
