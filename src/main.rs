fn main() -> anyhow::Result<()> {
    queens::runner::run()
}
