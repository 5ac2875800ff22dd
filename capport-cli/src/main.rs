fn main() -> anyhow::Result<()> {
    capport_cli::run()
}
