fn main() -> anyhow::Result<()> {
    branchscript::cli::run()
}
