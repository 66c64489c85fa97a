//! Packet ALU - CLI Entry Point
//!
//! Commands:
//! - `packet-alu add <a> <b>` - Add two bit strings
//! - `packet-alu sub <a> <b>` - Subtract two bit strings
//! - `packet-alu cmp <a> <b>` - Compare two bit strings
//! - `packet-alu to-dec <bits>` / `from-dec <value>` - Decimal conversion
//! - `packet-alu dump <file>` - Show a file as 8-bit packets

use clap::{Parser, Subcommand};
use packet_alu::{AluFlags, Packet};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "packet-alu")]
#[command(version = "0.1.0")]
#[command(about = "Width-agnostic binary arithmetic core for a software CPU emulator")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two bit strings
    Add {
        a: String,
        b: String,
        /// Output width in bits (default: widest operand + 1)
        #[arg(short, long)]
        width: Option<usize>,
    },
    /// Subtract B from A
    Sub {
        a: String,
        b: String,
        /// Output width in bits (default: widest operand)
        #[arg(short, long)]
        width: Option<usize>,
    },
    /// Compare the magnitudes of two bit strings
    Cmp {
        a: String,
        b: String,
    },
    /// Convert a bit string (up to 64 bits) to decimal
    ToDec {
        bits: String,
    },
    /// Convert a decimal value to a bit string
    FromDec {
        value: u64,
        /// Width of the result in bits
        #[arg(short, long, default_value = "64")]
        width: usize,
        /// Fail instead of dropping bits that do not fit
        #[arg(long)]
        strict: bool,
    },
    /// Stream a file as 8-bit packets
    Dump {
        /// Path to the file to read
        file: String,
        /// Maximum number of bytes to show (default: all)
        #[arg(short, long)]
        limit: Option<u64>,
    },
    /// Run the built-in self-test
    Test,
}

#[derive(Serialize)]
struct ArithOutput {
    bits: String,
    value: Option<u64>,
    flags: AluFlags,
}

#[derive(Serialize)]
struct DumpEntry {
    offset: u64,
    bits: String,
    value: u64,
}

#[derive(Serialize)]
struct CompareOutput {
    greater: bool,
    flags: AluFlags,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Add { a, b, width }) => {
            run_arith("+", &a, &b, width, cli.json);
        }
        Some(Commands::Sub { a, b, width }) => {
            run_arith("-", &a, &b, width, cli.json);
        }
        Some(Commands::Cmp { a, b }) => {
            run_compare(&a, &b, cli.json);
        }
        Some(Commands::ToDec { bits }) => {
            let packet = parse_or_exit(&bits);
            let value = unwrap_or_exit(packet_alu::to_decimal(&packet));
            if cli.json {
                print_json(&value);
            } else {
                println!("{}", value);
            }
        }
        Some(Commands::FromDec { value, width, strict }) => {
            let result = if strict {
                packet_alu::from_decimal_exact(value, width)
            } else {
                packet_alu::from_decimal(value, width)
            };
            let packet = unwrap_or_exit(result);
            if cli.json {
                print_json(&packet);
            } else {
                println!("{}", packet);
            }
        }
        Some(Commands::Dump { file, limit }) => {
            dump_file(&file, limit, cli.json);
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            println!("Packet ALU v0.1.0");
            println!("A width-agnostic binary arithmetic core");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_packet_arithmetic();
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn parse_or_exit(bits: &str) -> Packet {
    match Packet::parse(bits) {
        Ok(packet) => packet,
        Err(e) => {
            eprintln!("❌ Invalid operand '{}': {}", bits, e);
            std::process::exit(1);
        }
    }
}

fn unwrap_or_exit<T, E: std::fmt::Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("❌ Failed to encode JSON: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_arith(op: &str, a: &str, b: &str, width: Option<usize>, json: bool) {
    let a = parse_or_exit(a);
    let b = parse_or_exit(b);
    let widest = a.width().max(b.width());

    let (result, flags) = if op == "+" {
        unwrap_or_exit(packet_alu::add(&a, &b, width.unwrap_or(widest + 1)))
    } else {
        unwrap_or_exit(packet_alu::subtract(&a, &b, width.unwrap_or(widest)))
    };
    let value = packet_alu::to_decimal(&result).ok();

    if json {
        print_json(&ArithOutput { bits: result.to_string(), value, flags });
        return;
    }

    println!("  {}", a);
    println!("{} {}", op, b);
    println!("= {}", result);
    if let Some(value) = value {
        println!("  ({})", value);
    }
    println!("Flags: {}", flags);
}

fn run_compare(a: &str, b: &str, json: bool) {
    let a = parse_or_exit(a);
    let b = parse_or_exit(b);
    let width = a.width().max(b.width());
    let a = unwrap_or_exit(packet_alu::binary::normalize(&a, width));
    let b = unwrap_or_exit(packet_alu::binary::normalize(&b, width));

    let (greater, flags) = unwrap_or_exit(packet_alu::compare_magnitude(&a, &b));

    if json {
        print_json(&CompareOutput { greater, flags });
        return;
    }

    let relation = if flags.positive() {
        ">"
    } else if flags.negative() {
        "<"
    } else {
        "="
    };
    println!("{} {} {}", a, relation, b);
    println!("Flags: {}", flags);
}

fn dump_file(path: &str, limit: Option<u64>, json: bool) {
    let reader = unwrap_or_exit(packet_alu::open_packets(path));
    let limit = limit.unwrap_or(u64::MAX);

    let mut shown = Vec::new();
    for (offset, packet) in (0u64..).zip(reader) {
        if offset >= limit {
            break;
        }
        let packet = unwrap_or_exit(packet);
        let value = unwrap_or_exit(packet_alu::to_decimal(&packet));
        if json {
            shown.push(DumpEntry { offset, bits: packet.to_string(), value });
        } else {
            println!("{:08x}: {} {:3}", offset, packet, value);
        }
    }

    if json {
        print_json(&shown);
    }
}

fn demo_packet_arithmetic() {
    use packet_alu::{add, subtract, from_decimal, to_decimal};

    println!("━━━ Binary Packet Demo ━━━");
    println!();

    match from_decimal(255, 8) {
        Ok(packet) => println!("  255 as an 8-bit packet: {}", packet),
        Err(e) => println!("  conversion failed: {}", e),
    }

    let a = Packet::new(vec![true; 4]);
    let b = Packet::new(vec![true; 4]);
    if let Ok((sum, flags)) = add(&a, &b, 5) {
        let value = to_decimal(&sum).unwrap_or_default();
        println!("  {} + {} = {} ({})  {}", a, b, sum, value, flags);
    }

    let small = Packet::new(vec![false, false, true, true]);
    if let Ok((diff, flags)) = subtract(&small, &a, 4) {
        let value = to_decimal(&diff).unwrap_or_default();
        println!("  {} - {} = {} ({})  {}", small, a, diff, value, flags);
    }
    println!();
}

fn run_self_test() {
    use packet_alu::{add, subtract, compare_magnitude, from_decimal, to_decimal};

    println!("━━━ Packet ALU Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    let mut check = |name: &str, ok: bool| {
        print!("{}... ", name);
        if ok {
            println!("✓");
            passed += 1;
        } else {
            println!("✗");
            failed += 1;
        }
    };

    // Test 1: Conversion roundtrip
    let ok = [0u64, 1, 5, 255, 1u64 << 40, u64::MAX].iter().all(|&v| {
        from_decimal(v, 64)
            .and_then(|p| to_decimal(&p))
            .map(|back| back == v)
            .unwrap_or(false)
    });
    check("Decimal conversion roundtrip", ok);

    // Test 2: Known value
    let ok = to_decimal(&Packet::new(vec![false, true, false, true])).ok() == Some(5);
    check("0101 = 5", ok);

    // Test 3: Addition carries into a wider result
    let ones = Packet::new(vec![true; 4]);
    let ok = match add(&ones, &ones, 5) {
        Ok((sum, flags)) => to_decimal(&sum).ok() == Some(30) && !flags.overflow(),
        Err(_) => false,
    };
    check("1111 + 1111 = 11110", ok);

    // Test 4: Addition overflow
    let ok = matches!(add(&ones, &ones, 4), Ok((_, flags)) if flags.overflow());
    check("Addition overflow flag", ok);

    // Test 5: Subtraction underflow
    let one = Packet::new(vec![false, false, false, true]);
    let ok = matches!(
        subtract(&one, &ones, 4),
        Ok((_, flags)) if flags.negative() && flags.overflow()
    );
    check("Subtraction underflow flags", ok);

    // Test 6: Comparison
    let ok = matches!(compare_magnitude(&ones, &one), Ok((true, flags)) if flags.positive())
        && matches!(compare_magnitude(&one, &one), Ok((false, flags)) if flags.zero());
    check("Magnitude comparison", ok);

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
