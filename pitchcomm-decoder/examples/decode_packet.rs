//! Standalone PitchSignal decoder tool
//!
//! Decodes one or more hex packets (one per argument) and prints each report,
//! followed by a short summary of what was seen.
//!
//! Usage:
//!   decode_packet <hex> [<hex>...]
//!
//! Example:
//!   decode_packet 00020500000A00 "01 04 00 02 03 01 00"

use pitchcomm_decoder::{decode_hex, format_signal};
use std::env;

#[derive(Default)]
struct PacketStats {
    decoded: usize,
    failed: usize,
    pitches: usize,
    resets: usize,
    last_number: Option<u16>,
}

impl PacketStats {
    fn print_summary(&self) {
        println!("\n=== PACKET SUMMARY ===");
        println!("Decoded packets: {}", self.decoded);
        println!("Failed packets:  {}", self.failed);
        println!("Pitch signals:   {}", self.pitches);
        println!("Reset signals:   {}", self.resets);
        if let Some(number) = self.last_number {
            println!("Last number:     #{}", number);
        }
    }
}

fn main() {
    env_logger::init();

    let packets: Vec<String> = env::args().skip(1).collect();
    if packets.is_empty() {
        eprintln!("Usage: decode_packet <hex> [<hex>...]");
        std::process::exit(1);
    }

    let mut stats = PacketStats::default();

    for packet in &packets {
        match decode_hex(packet) {
            Ok(signal) => {
                stats.decoded += 1;
                if signal.is_pitch() {
                    stats.pitches += 1;
                } else if signal.signal_type == 1 {
                    stats.resets += 1;
                }
                stats.last_number = Some(signal.number);
                println!("{}\n", format_signal(&signal));
            }
            Err(e) => {
                stats.failed += 1;
                eprintln!("{:?}: {}", packet, e);
            }
        }
    }

    stats.print_summary();
}
