use eyre::Result;

fn main() -> Result<()> {
    da_profile::args::run()
}
