fn main() -> anyhow::Result<()> {
    let command_line_interface = simset::cli::CommandLineInterface::load();
    command_line_interface.run()
}
