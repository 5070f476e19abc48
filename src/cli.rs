// src/cli.rs
use std::{env, path::PathBuf};

use crate::params::Params;
use crate::progress::ConsoleProgress;
use crate::{runner, workbook};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    if params.list_sheets {
        let book = workbook::open(&params.workbook)?;
        for name in workbook::sheet_names(&book) {
            println!("{}", name);
        }
        return Ok(());
    }

    let mut progress = ConsoleProgress;
    let summary = runner::run(&params, Some(&mut progress))?;
    if !params.dry_run {
        println!(
            "✅ README updated with month separators and summary ({})",
            summary.readme.display()
        );
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-w" | "--workbook" => {
                params.workbook = PathBuf::from(args.next().ok_or("Missing workbook path")?);
            }
            "-o" | "--readme" => {
                params.readme = PathBuf::from(args.next().ok_or("Missing readme path")?);
            }
            "--sheets" => {
                let v = args.next().ok_or("Missing value for --sheets")?;
                params.sheets = parse_sheet_list(&v)?;
            }
            "--list-sheets" => params.list_sheets = true,
            "--dry-run" => params.dry_run = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

fn parse_sheet_list(s: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let out: Vec<String> = s
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect();
    if out.is_empty() {
        return Err("Empty sheet list".into());
    }
    Ok(out)
}
