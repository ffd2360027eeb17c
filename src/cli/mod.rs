use anstream::println;
use clap::{ArgAction, Parser, Subcommand};

use crate::debug::{add_module_filter, set_debug_level, DebugLevel};
use crate::term::Term;
use crate::typing::{Context, Type};
use crate::{abs, app, var};

#[derive(Parser)]
#[command(name = "stlc", version, about = "simply typed lambda calculus engine", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Set debug level to trace (overrides verbose)
    #[arg(long = "trace", action = ArgAction::SetTrue, global = true)]
    pub trace: bool,

    /// Filter debug output to modules (comma-separated: check,reduce,rewrite)
    #[arg(long = "modules", value_name = "LIST", global = true)]
    pub modules: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the classic demonstration terms and type-check a sample
    Demo,
    /// Drive a sample term to normal form one step at a time
    Steps {
        /// Reduce omega instead of (S I) I (never reaches normal form)
        #[arg(long, action = ArgAction::SetTrue)]
        omega: bool,

        /// Maximum number of reduction steps before giving up
        #[arg(long, default_value_t = 32)]
        limit: usize,
    },
}

pub fn run() {
    let cli = Cli::parse();
    // Wire verbosity to debug level, with --trace overriding verbose count
    let level = if cli.trace {
        DebugLevel::Trace
    } else {
        match cli.verbose {
            0 => DebugLevel::Error,
            1 => DebugLevel::Warn,
            2 => DebugLevel::Info,
            3 => DebugLevel::Debug,
            _ => DebugLevel::Trace,
        }
    };
    set_debug_level(level);

    if let Some(mods) = &cli.modules {
        for m in mods.split(',').map(|s| s.trim()).filter(|s| !s.is_empty()) {
            add_module_filter(m);
        }
    }

    match &cli.command {
        Commands::Demo => demo(),
        Commands::Steps { omega, limit } => steps(*omega, *limit),
    }
}

/// The S combinator: λx. λy. λz. ((x) (z)) ((y) (z))
fn s_combinator() -> Term {
    abs!(
        "x",
        abs!(
            "y",
            abs!(
                "z",
                app!(app!(var!("x"), var!("z")), app!(var!("y"), var!("z")))
            )
        )
    )
}

/// The identity combinator λ<name>. <name>
fn identity(name: &str) -> Term {
    abs!(name, var!(name))
}

/// (λx. (x) (x)) (λx. (x) (x)), which reduces to itself forever
fn omega() -> Term {
    let self_apply = abs!("x", app!(var!("x"), var!("x")));
    app!(self_apply.clone(), self_apply)
}

fn demo() {
    let test_term = app!(app!(s_combinator(), identity("a")), identity("b"));
    println!("{}", test_term);
    println!("{}", omega());

    // λx:Int. x checks to Int -> Int in the empty context
    let typed_identity = abs!("x", Type::base("Int"), var!("x"));
    match typed_identity.type_check(&Context::new()) {
        Ok(ty) => println!("{} : {}", typed_identity, ty),
        Err(err) => println!("{}", err),
    }

    // (f) (x) with f : Int -> Bool and x : Bool is a domain mismatch
    let mut ctx = Context::new();
    ctx.add(
        "f".to_string(),
        Type::function(Type::base("Int"), Type::base("Bool")),
    );
    ctx.add("x".to_string(), Type::base("Bool"));
    let ill_typed = app!(var!("f"), var!("x"));
    match ill_typed.type_check(&ctx) {
        Ok(ty) => println!("{} : {}", ill_typed, ty),
        Err(err) => println!("{}", err),
    }
}

fn steps(use_omega: bool, limit: usize) {
    let mut term = if use_omega {
        omega()
    } else {
        app!(app!(s_combinator(), identity("a")), identity("b"))
    };
    println!("{}", term);

    for _ in 0..limit {
        if term.is_normal() {
            break;
        }
        match term.beta_reduce() {
            Ok(next) => {
                println!("→ {}", next);
                term = next;
            }
            Err(err) => {
                println!("{}", err);
                return;
            }
        }
    }

    if term.is_normal() {
        println!("normal form: {}", term);
    } else {
        println!("gave up after {} steps", limit);
    }
}
