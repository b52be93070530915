//! Write an inventory snapshot to a buffer file and read it back

use varbuf::{BufferData, BufferFile, Value};

struct Slot {
    item: &'static str,
    count: u32,
    durability: f32,
    equipped: bool,
}

fn main() -> varbuf::Result<()> {
    let slots = [
        Slot { item: "iron_sword", count: 1, durability: 0.82, equipped: true },
        Slot { item: "healing_potion", count: 12, durability: 1.0, equipped: false },
        Slot { item: "rope", count: 3, durability: 0.5, equipped: false },
    ];

    let mut buffer = BufferData::new();
    buffer.write_string("player-1").write_int(slots.len() as u32);
    for slot in &slots {
        buffer
            .write_string(slot.item)
            .write_int(slot.count)
            .write_float(slot.durability)
            .write_boolean(slot.equipped);
    }

    let path = std::env::temp_dir().join("inventory_snapshot.bin");
    BufferFile::save(&path, &buffer)?;
    println!("Wrote {} bytes to '{}'", buffer.len(), path.display());

    let mut loaded = BufferFile::load(&path)?;
    let owner = loaded.read_string()?;
    let slot_count = loaded.read_int()?;
    println!("\nInventory of {owner} ({slot_count} slots):");

    for _ in 0..slot_count {
        let fields = loaded.extract("sifb")?;
        if let [Value::Text(item), Value::Int(count), Value::Float(durability), Value::Boolean(equipped)] =
            fields.as_slice()
        {
            let marker = if *equipped { "*" } else { " " };
            println!("  {marker} {item:<16} x{count:<3} durability {:.0}%", durability * 100.0);
        }
    }

    println!("\n{} bytes left unread", loaded.remaining());
    Ok(())
}
