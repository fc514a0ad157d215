#[macro_use] extern crate clap;
extern crate colored;
extern crate die;
extern crate env_logger;
#[macro_use] extern crate log;

mod suite;

use colored::*;
use die::Framework;
use std::io;
use std::process;

fn main() {
    env_logger::init();

    let matches = clap_app!(tester =>
        (version: "0.1.0")
        (author: "Kyle Phelps <kylep91@gmail.com>")
        (about: "Runs the Hello Kitty test series")
        (@arg PLAIN: --plain "Disables colored output")
    ).get_matches();

    let colorize = !matches.is_present("PLAIN")
        && control::SHOULD_COLORIZE.should_colorize();
    let mut tests = Framework::new("hello kitty")
        .with_purpose("Testing the powers of Hello Kitty!")
        .colored(colorize);

    match run(&mut tests) {
        Ok(()) if tests.summary().all_passed() => {}
        Ok(()) => process::exit(1),
        Err(e) => {
            error!("could not report test results: {}", e);
            eprintln!("{}", format!("error: {}", e).red().bold());
            process::exit(2);
        }
    }
}

fn run(tests: &mut Framework) -> io::Result<()> {
    tests.display_greetings()?;
    suite::hello_kitty(tests);
    tests.run()?;
    tests.display_summary()
}
