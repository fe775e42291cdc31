use userstore::{UserData, UserStore};

fn main() -> Result<(), userstore::Error> {
    let path = std::env::temp_dir().join("userstore_demo_basic.json");
    let _ = std::fs::remove_file(&path);
    let store = UserStore::open(&path);

    // create / get
    let ada = store.create(UserData {
        name: "Ada".into(),
        phone: 5550101,
        email: "ada@example.com".into(),
    })?;
    let bo = store.create(UserData {
        name: "Bo".into(),
        phone: 5550102,
        email: "bo@example.com".into(),
    })?;
    println!("created ids {} and {}", ada.id, bo.id);
    println!("ada = {:?}", store.get(ada.id)?);

    // update keeps the id
    store.update(
        ada.id,
        UserData {
            name: "Ada Lovelace".into(),
            ..ada.data.clone()
        },
    )?;
    println!("ada after update = {:?}", store.get(ada.id)?);

    // bulk lookup follows the requested order
    println!("bulk = {:?}", store.get_many(&[bo.id, ada.id]));

    store.delete(bo.id)?;
    println!("len after delete = {}", store.len());

    // every mutation has already been mirrored to disk
    println!("snapshot on disk:\n{}", std::fs::read_to_string(store.path())?);

    let _ = std::fs::remove_file(&path);
    Ok(())
}
