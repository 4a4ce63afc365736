//! Ripple Calc - CLI Entry Point
//!
//! Commands:
//! - `ripple-calc add [A] [B]` - Digit-wise binary addition
//! - `ripple-calc sub [MINUEND] [SUBTRAHEND]` - Two's-complement subtraction
//! - `ripple-calc test` - Run the built-in self-test
//!
//! Operands left off the command line are prompted for on stdin.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ripple-calc")]
#[command(version = "0.1.0")]
#[command(about = "An unsigned binary ripple-carry calculator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two numbers digit by digit with ripple carry
    Add {
        /// First operand, typed as a decimal integer
        a: Option<u64>,
        /// Second operand, typed as a decimal integer
        b: Option<u64>,
        /// Emit the result as a JSON record
        #[arg(long)]
        json: bool,
    },
    /// Subtract two equal-width binary numbers via two's complement
    Sub {
        /// Minuend, most significant bit first (e.g. 1010)
        minuend: Option<String>,
        /// Subtrahend, same width as the minuend (e.g. 0011)
        subtrahend: Option<String>,
        /// Emit the result as a JSON record
        #[arg(long)]
        json: bool,
    },
    /// Run the built-in self-test
    Test,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Add { a, b, json }) => {
            run_add(a, b, json);
        }
        Some(Commands::Sub { minuend, subtrahend, json }) => {
            run_sub(minuend, subtrahend, json);
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            println!("Ripple Calc v0.1.0");
            println!("An unsigned binary ripple-carry calculator");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_binary_primitives();
        }
    }
}

// ============================================================================
// Console Input
// ============================================================================

/// Whitespace-separated token reader over stdin.
///
/// Tokens buffered from one line are consumed before the next line is
/// read, so bits may arrive space-separated on a single line or one
/// per line.
struct Console {
    pending: VecDeque<String>,
}

impl Console {
    fn new() -> Self {
        Self { pending: VecDeque::new() }
    }

    /// Next token from stdin, reading more lines as needed.
    fn next_token(&mut self) -> String {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return token;
            }

            let mut line = String::new();
            match io::stdin().lock().read_line(&mut line) {
                Ok(0) => {
                    eprintln!("❌ Unexpected end of input");
                    std::process::exit(1);
                }
                Ok(_) => {
                    self.pending
                        .extend(line.split_whitespace().map(str::to_string));
                }
                Err(e) => {
                    eprintln!("❌ Failed to read input: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    /// Prompt for and read a non-negative decimal number.
    fn prompt_number(&mut self, prompt: &str) -> u64 {
        print!("{}", prompt);
        let _ = io::stdout().flush();

        let token = self.next_token();
        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("❌ Expected a non-negative number, got '{}'", token);
                std::process::exit(1);
            }
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

fn run_add(a: Option<u64>, b: Option<u64>, json: bool) {
    use ripple::add_digitwise;

    let mut console = Console::new();
    let a = a.unwrap_or_else(|| console.prompt_number("Enter the first binary number: "));
    let b = b.unwrap_or_else(|| console.prompt_number("Enter the second binary number: "));

    let sum = add_digitwise(a, b);

    if json {
        let record = serde_json::json!({
            "a": a,
            "b": b,
            "sum": sum,
        });
        println!("{}", record);
    } else {
        println!("{}", sum);
    }
}

fn run_sub(minuend: Option<String>, subtrahend: Option<String>, json: bool) {
    use ripple::subtract;

    let (a, b) = match (minuend, subtrahend) {
        (Some(m), Some(s)) => (parse_operand(&m), parse_operand(&s)),
        _ => read_operands_interactive(),
    };

    match subtract(&a, &b) {
        Ok(outcome) => {
            if json {
                let record = serde_json::json!({
                    "minuend": a.to_string(),
                    "subtrahend": b.to_string(),
                    "difference": outcome.word().to_string(),
                });
                println!("{}", record);
            } else {
                println!("Result (a - b) in binary: {}", outcome.word());
            }
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn parse_operand(s: &str) -> ripple::BitWord {
    match ripple::BitWord::parse(s) {
        Ok(word) => word,
        Err(e) => {
            eprintln!("❌ Invalid operand '{}': {}", s, e);
            std::process::exit(1);
        }
    }
}

/// Prompt for a bit width and then both operands bit by bit, the way
/// they would be keyed into a lab worksheet. Every bit is validated as
/// it is read; the first invalid token aborts the run.
fn read_operands_interactive() -> (ripple::BitWord, ripple::BitWord) {
    use ripple::BitWord;

    let mut console = Console::new();

    let width = console.prompt_number("Enter the number of bits: ");
    if width < 1 || width > BitWord::MAX_WIDTH as u64 {
        eprintln!("❌ Bit width must be between 1 and {}", BitWord::MAX_WIDTH);
        std::process::exit(1);
    }
    let width = width as usize;

    println!("Enter the first binary number (minuend) bit by bit (space separated):");
    let a = read_bits(&mut console, width);

    println!("Enter the second binary number (subtrahend) bit by bit (space separated):");
    let b = read_bits(&mut console, width);

    (a, b)
}

fn read_bits(console: &mut Console, width: usize) -> ripple::BitWord {
    use ripple::{Bit, BitWord};

    // Bits arrive in reading order, most significant first
    let mut bits = Vec::with_capacity(width);
    for _ in 0..width {
        match console.next_token().as_str() {
            "0" => bits.push(Bit::O),
            "1" => bits.push(Bit::I),
            _ => {
                eprintln!("❌ Invalid bit. Only 0 or 1 allowed.");
                std::process::exit(1);
            }
        }
    }

    BitWord::from_msb_bits(bits)
}

// ============================================================================
// Demo & Self-Test
// ============================================================================

fn demo_binary_primitives() {
    use ripple::binary::arith;
    use ripple::{add_digitwise, Bit, BitWord};

    println!("━━━ Binary Ripple-Carry Demo ━━━");
    println!();

    println!("Bits (single binary digits):");
    println!("  O = {:?} = {}", Bit::O, Bit::O.to_u8());
    println!("  I = {:?} = {}", Bit::I, Bit::I.to_u8());
    println!();

    println!("BitWord (explicitly sized words, up to {} bits):", BitWord::MAX_WIDTH);
    let a = BitWord::from_u64(10, 4);
    let b = BitWord::from_u64(3, 4);
    println!("  10 as a 4-bit word: {}", a);
    println!("  3 as a 4-bit word:  {}", b);
    println!();

    println!("Ripple-carry arithmetic:");
    let (sum, carry) = arith::add(&a, &b);
    println!("  {} + {} = {} (carry out {})", a, b, sum, carry);
    println!("  two's complement of {} = {}", b, arith::twos_complement(&b));
    println!("  digit-wise 1010 + 11 = {}", add_digitwise(1010, 11));
    println!();

    println!("✓ Core binary primitives working!");
}

fn run_self_test() {
    use ripple::binary::arith;
    use ripple::{add_digitwise, subtract, Bit, BitWord, SubtractError};

    println!("━━━ Ripple Calc Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    // Test 1: Bit inversion involution
    print!("Bit inversion involution... ");
    let mut ok = true;
    for b in Bit::ALL {
        if b.invert().invert() != b {
            ok = false;
            break;
        }
    }
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 2: Full adder against integer addition
    print!("Full adder truth table... ");
    ok = true;
    for a in Bit::ALL {
        for b in Bit::ALL {
            for c in Bit::ALL {
                let (sum, carry) = a.full_add(b, c);
                let total = a.to_u8() + b.to_u8() + c.to_u8();
                if sum.to_u8() != total % 2 || carry.to_u8() != total / 2 {
                    ok = false;
                }
            }
        }
    }
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 3: Word conversion roundtrip
    print!("BitWord conversion roundtrip... ");
    ok = true;
    for value in [0u64, 1, 7, 10, 255, 65535] {
        if BitWord::from_u64(value, 16).to_u64() != value {
            ok = false;
            break;
        }
    }
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 4: Digit-wise addition
    print!("Digit-wise addition... ");
    if add_digitwise(1, 1) == "10" && add_digitwise(1010, 11) == "1101" && add_digitwise(0, 0) == "0" {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    // Test 5: Two's complement cancellation
    print!("Two's complement cancellation... ");
    ok = true;
    for value in [1u64, 3, 10, 15] {
        let word = BitWord::from_u64(value, 4);
        let (result, _) = arith::add(&word, &arith::twos_complement(&word));
        if !result.is_zero() {
            ok = false;
            break;
        }
    }
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 6: Subtraction
    print!("Two's-complement subtraction... ");
    let a = BitWord::parse("1010").unwrap();
    let b = BitWord::parse("0011").unwrap();
    match subtract(&a, &b) {
        Ok(outcome) if format!("{}", outcome.word()) == "0111" => {
            println!("✓");
            passed += 1;
        }
        _ => {
            println!("✗");
            failed += 1;
        }
    }

    // Test 7: Underflow rejection
    print!("Underflow rejection... ");
    let small = BitWord::parse("010").unwrap();
    let large = BitWord::parse("100").unwrap();
    if subtract(&small, &large) == Err(SubtractError::Underflow) {
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
