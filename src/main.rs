//! Lattice Snakes - CLI Entry Point
//!
//! Commands:
//! - `snakes locate <tiling> <a> <b>` - Coordinate to positional and curve index
//! - `snakes find <tiling> <curve>` - Curve numeral to coordinate
//! - `snakes cell <tiling> <index>` - Positional index to coordinate
//! - `snakes boundary <tiling> <a> <b>` - Drawing polygon of a cell
//! - `snakes explore [tiling]` - Interactive explorer
//! - `snakes test` - Built-in self-test

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use snakes::{CellReport, TilingKind};

#[derive(Parser)]
#[command(name = "snakes")]
#[command(author = "Yigit")]
#[command(version = "0.1.0")]
#[command(about = "Flowsnake and mandelsnake cell indexing on the hex and square lattices")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a cell by its lattice coordinate
    #[command(allow_negative_numbers = true)]
    Locate {
        /// Tiling to use
        #[arg(value_enum)]
        tiling: TilingKind,
        /// First axis (q for hex, x for square)
        a: i64,
        /// Second axis (r for hex, y for square)
        b: i64,
        /// Third cube coordinate for hex, checked against q + r + s = 0
        #[arg(long)]
        s: Option<i64>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Look up a cell by its curve index numeral
    Find {
        /// Tiling to use
        #[arg(value_enum)]
        tiling: TilingKind,
        /// Curve index, e.g. `=2-` (hex) or `--3-` (square)
        #[arg(allow_hyphen_values = true)]
        curve: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Look up a cell by its positional index
    Cell {
        /// Tiling to use
        #[arg(value_enum)]
        tiling: TilingKind,
        /// Positional index (decimal)
        index: u64,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the drawing polygon of a cell
    #[command(allow_negative_numbers = true)]
    Boundary {
        /// Tiling to use
        #[arg(value_enum)]
        tiling: TilingKind,
        /// First axis (q for hex, x for square)
        a: i64,
        /// Second axis (r for hex, y for square)
        b: i64,
        /// Distance between neighbouring cell centres
        #[arg(long, default_value = "1.0")]
        scale: f64,
        /// Print the polygon as JSON
        #[arg(long)]
        json: bool,
    },
    /// Browse the curve interactively
    #[cfg(feature = "tui")]
    Explore {
        /// Tiling to start on
        #[arg(value_enum, default_value = "hex")]
        tiling: TilingKind,
    },
    /// Run the built-in self-test
    Test,
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "snakes=warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Locate { tiling, a, b, s, json }) => {
            locate_cell(tiling, a, b, s, json);
        }
        Some(Commands::Find { tiling, curve, json }) => {
            let report = tiling.find(&curve).unwrap_or_else(|e| fail("Invalid curve index", e));
            print_report(&report, json);
        }
        Some(Commands::Cell { tiling, index, json }) => {
            let report = tiling.cell(index).unwrap_or_else(|e| fail("Invalid positional index", e));
            print_report(&report, json);
        }
        Some(Commands::Boundary { tiling, a, b, scale, json }) => {
            print_boundary(tiling, a, b, scale, json);
        }
        #[cfg(feature = "tui")]
        Some(Commands::Explore { tiling }) => {
            if let Err(e) = snakes::run_explorer(tiling) {
                fail("Explorer error", e);
            }
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            println!("Lattice Snakes v0.1.0");
            println!("Flowsnake (hex) and mandelsnake (square) cell indexing");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_curves();
        }
    }
}

fn fail(context: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("❌ {}: {}", context, err);
    std::process::exit(1);
}

fn locate_cell(tiling: TilingKind, a: i64, b: i64, s: Option<i64>, json: bool) {
    if let Some(s) = s {
        if tiling != TilingKind::Hex {
            fail("Invalid coordinate", "--s only applies to the hex tiling");
        }
        if let Err(e) = snakes::HexCoord::from_cube(a, b, s) {
            fail("Invalid coordinate", e);
        }
    }

    let report = tiling.locate(a, b).unwrap_or_else(|e| fail("Cannot index cell", e));
    print_report(&report, json);
}

fn print_report(report: &CellReport, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(s) => println!("{}", s),
            Err(e) => fail("Failed to serialize report", e),
        }
    } else {
        println!("{}", report);
    }
}

fn print_boundary(tiling: TilingKind, a: i64, b: i64, scale: f64, json: bool) {
    if !scale.is_finite() {
        fail("Invalid scale", format!("{} is not a finite number", scale));
    }

    let polygon = tiling.boundary(a, b, scale);
    if json {
        match serde_json::to_string_pretty(&polygon) {
            Ok(s) => println!("{}", s),
            Err(e) => fail("Failed to serialize polygon", e),
        }
        return;
    }

    println!("{} cell ({}, {}) at scale {}:", tiling, a, b, scale);
    for p in polygon {
        println!("  {:>10.4} {:>10.4}", p.x, p.y);
    }
}

fn demo_curves() {
    println!("━━━ Curve Demo ━━━");
    println!();

    for tiling in TilingKind::ALL {
        println!("{} (base {}), curve indices -3..=3:", tiling, tiling.base());
        for value in -3..=3 {
            match tiling.find_value(value) {
                Ok(report) => println!(
                    "  {:>3} {:>4}  -> ({}, {})  positional {}",
                    value, report.curve, report.coord[0], report.coord[1], report.positional
                ),
                Err(e) => println!("  {:>3}  ✗ {}", value, e),
            }
        }
        println!();
    }

    println!("✓ Both snakes walking!");
}

fn run_self_test() {
    use snakes::{hex, square, FlowIndex, HexCoord, MandelIndex, PositionalIndex, SquareCoord};
    use snakes::radix::{self, Quinary, Septenary};

    println!("━━━ Lattice Snakes Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    // Test 1: numeral codec roundtrip
    print!("Balanced numeral roundtrip... ");
    let ok = [-1000i64, -7, -1, 0, 1, 7, 1000, i64::MIN, i64::MAX].iter().all(|&v| {
        radix::decode::<Septenary>(&radix::encode::<Septenary>(v)) == Ok(v)
            && radix::decode::<Quinary>(&radix::encode::<Quinary>(v)) == Ok(v)
    });
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 2: known numerals
    print!("Known numerals... ");
    if hex::encode(-113) == "=2-" && square::encode(4) == "--" {
        println!("✓");
        passed += 1;
    } else {
        println!("✗ (got {} and {})", hex::encode(-113), square::encode(4));
        failed += 1;
    }

    // Test 3: hex coordinate roundtrip
    print!("Hex coordinate roundtrip... ");
    let ok = (-20..=20).all(|q| {
        (-20..=20).all(|r| {
            let c = HexCoord::new(q, r);
            hex::coord_to_index(c).map(hex::index_to_coord) == Ok(c)
        })
    });
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 4: square coordinate roundtrip
    print!("Square coordinate roundtrip... ");
    let ok = (-20..=20).all(|x| {
        (-20..=20).all(|y| {
            let c = SquareCoord::new(x, y);
            square::coord_to_index(c).map(square::index_to_coord) == Ok(c)
        })
    });
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 5: hex curve continuity
    print!("Flowsnake continuity... ");
    let cells: Vec<_> = (-500..=500)
        .filter_map(|v| hex::curve_to_coord(FlowIndex::new(v)).ok())
        .collect();
    if cells.len() == 1001 && cells.windows(2).all(|w| w[0].is_adjacent(&w[1])) {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    // Test 6: square curve continuity
    print!("Mandelsnake continuity... ");
    let cells: Vec<_> = (-500..=500)
        .filter_map(|v| square::curve_to_coord(MandelIndex::new(v)).ok())
        .collect();
    if cells.len() == 1001 && cells.windows(2).all(|w| w[0].is_king_adjacent(&w[1])) {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    // Test 7: transducer roundtrip
    print!("Positional/curve transducer roundtrip... ");
    let ok = (0u64..2401).all(|n| {
        let index = PositionalIndex(n);
        hex::index_to_curve(index).and_then(hex::curve_to_index) == Ok(index)
    });
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 8: malformed input
    print!("Malformed numerals rejected... ");
    if hex::decode("12x").is_err() && square::decode("4").is_err() && hex::decode("").is_err() {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
