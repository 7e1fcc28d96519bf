use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;

use ids_ai::capture;

#[derive(Parser, Debug)]
#[command(about = "Capture a fixed number of packets and print IPv4 endpoints")]
struct Args {
    /// Interface to capture on
    #[arg(short, long, default_value = "en0")]
    iface: String,

    /// Stop after this many frames
    #[arg(short, long, default_value_t = 10)]
    count: usize,
}

fn main() -> ids_ai::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = stop.clone();
        ctrlc::set_handler(move || {
            println!("\nCtrl+C received, stopping capture...");
            stop.store(true, Ordering::SeqCst);
        })?;
    }

    println!("Starting packet sniff on '{}' (requires root)...", args.iface);

    let interface = capture::find_interface(&args.iface)?;
    let mut rx = capture::open_channel(&interface)?;

    let summary = capture::sniff(rx.as_mut(), args.count, &stop, |src, dst| {
        println!("IP: {} -> {}", src, dst);
    })?;

    println!(
        "Done: {} IPv4 packets in {} frames.",
        summary.ip_packets, summary.frames
    );
    Ok(())
}
