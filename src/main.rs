use apibench::error::AppResult;

fn main() -> AppResult<()> {
    apibench::entry::run()
}
