fn main() {
    #[cfg(feature = "cli")]
    lcsdelta::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("lcsdelta: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
