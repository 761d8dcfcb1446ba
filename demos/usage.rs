use syncset::{HashSet, SetError};

fn main() -> Result<(), SetError<&'static str>> {
    let set = HashSet::new();
    set.add(["hello"])?;
    set.add(["world"])?;

    println!("{:?}", set);
    println!("{}", set.has(["world", "hello"]));
    println!("{:?}", set);
    println!("{}", set.len());
    set.clear();
    println!("{}", set.len());

    Ok(())
}
