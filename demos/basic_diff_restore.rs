use lcsdelta::engine::{apply_diff, produce_diff};
use lcsdelta::format::decode_records;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let old = b"<config>debug=false</config>";
    let new = b"<config>debug=true;trace=on</config>";

    let diff = produce_diff(old, new)?;
    for record in decode_records(&diff)? {
        println!(
            "anchor {:>3}  delete {:>3}  insert {:?}",
            record.anchor,
            record.deleted,
            String::from_utf8_lossy(&record.inserted)
        );
    }

    let restored = apply_diff(old, &diff)?;
    assert_eq!(restored, new);

    println!(
        "old {} bytes + diff {} bytes -> restored {} bytes",
        old.len(),
        diff.len(),
        restored.len()
    );

    Ok(())
}
