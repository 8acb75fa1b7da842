use std::process::ExitCode;

use brlwe::vectors::{ENC2_A, ENC2_MESSAGE};
use brlwe::{Parameters, Report, Session};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: brlwe-demo [enc1|enc2|enc3|enct|ntt128|ntt256] [seed]";

fn parse_seed(arg: Option<String>) -> Option<[u8; 32]> {
    match arg {
        None => Some(sampling::new_seed()),
        Some(s) => {
            let value: u64 = s.parse().ok()?;
            let mut seed: [u8; 32] = [0u8; 32];
            seed[..8].copy_from_slice(&value.to_le_bytes());
            Some(seed)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let name: String = args.next().unwrap_or_else(|| "enc2".to_string());

    let Some(params) = Parameters::preset(&name) else {
        eprintln!("unknown preset {name}\n{USAGE}");
        return ExitCode::FAILURE;
    };
    let Some(seed) = parse_seed(args.next()) else {
        eprintln!("seed must be an unsigned integer\n{USAGE}");
        return ExitCode::FAILURE;
    };

    info!(%params, "starting");

    let session: Result<(Session, Vec<u8>), brlwe::Error> = if params == Parameters::ENC2 {
        Session::with_public(params, &ENC2_A, seed).map(|s| (s, ENC2_MESSAGE.to_vec()))
    } else {
        Session::new(params, seed).and_then(|mut s| {
            let mut message: Vec<u8> = vec![0u8; params.n];
            s.fill_message(&mut message)?;
            Ok((s, message))
        })
    };

    let report: Result<Report, brlwe::Error> =
        session.and_then(|(mut session, message)| session.run(&message));

    match report {
        Ok(report) => {
            info!(
                keygen = ?report.keygen,
                encrypt = ?report.encrypt,
                decrypt = ?report.decrypt,
                "timings"
            );
            if report.success() {
                println!("{name}: success");
            } else {
                println!("{name}: {} of {} bits wrong", report.errors, params.n);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "round trip failed");
            ExitCode::FAILURE
        }
    }
}
