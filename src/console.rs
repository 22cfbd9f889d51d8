//! Startup banner for the terminal.

use colored::Colorize;

pub fn print_banner() {
    println!();
    println!("{}", "╔═══════════════════════════════════════════════╗".cyan());
    let title = format!("Attendances v{}", env!("CARGO_PKG_VERSION"));
    println!("║  {}  ║", format!("{:<43}", title).bold().white());
    println!("║  {}  ║", format!("{:<43}", "Attendance records, newest first").dimmed());
    println!("{}", "╚═══════════════════════════════════════════════╝".cyan());
    println!();
}

pub fn print_startup(addr: &str, db_path: &str) {
    println!("{} {}", "✓".green().bold(), "Server ready".white().bold());
    println!("  {} {}", "→".dimmed(), format!("http://{}", addr).cyan().underline());
    println!("  {} {}", "db:".dimmed(), db_path.white());
    println!();
    println!("{}", "Endpoints:".white().bold());
    println!("  {} {} {}", "GET".green(), "/attendances".white(), "List attendances".dimmed());
    println!("  {} {}      {}", "GET".green(), "/metrics".white(), "Counters".dimmed());
    println!("  {} {}       {}", "GET".green(), "/health".white(), "Health check".dimmed());
    println!();
}
