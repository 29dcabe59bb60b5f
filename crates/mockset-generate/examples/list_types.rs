use mockset_generate::TypeRegistry;

fn main() {
    let registry = TypeRegistry::new();
    for name in registry.type_names() {
        println!("{name}");
    }
}
