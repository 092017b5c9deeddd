use chain_hashmap::{HashTable, TableConfig};
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    /// Keys 0..count are inserted with their squares as values.
    #[arg(short = 'n', long = "count", default_value_t = 10)]
    count: u64,
    #[arg(short = 'c', long = "initial_capacity", default_value_t = 100)]
    initial_capacity: usize,
}

fn main() {
    let args = Args::parse();

    let cfg = TableConfig::new().initial_capacity(args.initial_capacity);
    let mut table: HashTable<u64, u64> = match HashTable::with_config(cfg) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    for i in 0..args.count {
        table.put(i, i * i);
    }
    table.put(5, 1000);
    table.put(2, 4000);

    println!("{:?}", table);
    println!("len: {}, capacity: {}", table.len(), table.capacity());

    loop {
        match table.popitem() {
            Ok(v) => println!("{v}"),
            Err(e) => {
                println!("{e}");
                break;
            }
        }
    }
}
