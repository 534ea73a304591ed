use parse_zone::{extract_offset, ZoneParser};

fn main() {
    let date: String = std::env::args().nth(1).unwrap_or("".to_string());
    let zoned = ZoneParser::from_env().parse_zone(&date);
    println!("{} {}", extract_offset(&date), zoned)
}
