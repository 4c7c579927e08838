use crate::prefix::PrefixCache;
use crate::time::Zone;
use std::time::SystemTime;

pub fn run(tag: &str, level: &str, zone: Zone) -> anyhow::Result<()> {
    let mut cache = PrefixCache::new(tag, zone);
    println!("{}", cache.update(level, SystemTime::now()));
    Ok(())
}
