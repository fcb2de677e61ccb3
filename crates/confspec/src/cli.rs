use confspec_core::validation::{all_validate_to, in_range, is_one_of, non_empty};
use confspec_core::{
    BooleanOption, ConfigOption, Error, FloatOption, IntegerOption, ListOption, Manager, Result,
    TextOption, supported_formats,
};
use log::info;

/// Languages accepted by the `langs` option
pub const LANGUAGES: [&str; 5] = ["C", "Java", "Python", "PHP", "Go"];

/// The built-in "person" specification
pub fn person_spec() -> Result<Vec<ConfigOption>> {
    Ok(vec![
        ConfigOption::builder("name", TextOption::line(), "Unknown")
            .validator(non_empty())
            .category("person")
            .comment("The name of the person.")
            .build()?,
        ConfigOption::builder("age", IntegerOption::new(), 18)
            .validator(in_range(0, 110))
            .category("person")
            .comment("The age of the person.")
            .build()?,
        ConfigOption::builder("drinks", BooleanOption::new(), false)
            .category("person")
            .comment("Person drinks alcohol.")
            .build()?,
        ConfigOption::builder("height", FloatOption::new(), 1.0)
            .validator(in_range(0.05, 2.72))
            .category("person")
            .comment("The person height (in meters).")
            .build()?,
        ConfigOption::builder(
            "langs",
            ListOption::of(TextOption::string()),
            Vec::<String>::new(),
        )
        .validator(all_validate_to(is_one_of(LANGUAGES)))
        .category("person")
        .comment("Programming languages the person knows.")
        .build()?,
    ])
}

/// Print every option grouped by category.
pub fn show(manager: &Manager) {
    println!("{}", manager);
}

/// Print the represented value of one option.
pub fn get(manager: &Manager, key: &str) -> Result<()> {
    let option = manager
        .option(key)
        .ok_or_else(|| Error::UnknownKey(key.to_string()))?;
    println!("{}", option);
    Ok(())
}

/// Set one option from its text form. Writeback persists the change.
pub fn set(manager: &mut Manager, key: &str, value: &str) -> Result<()> {
    if manager.set(key, value)? {
        info!("Option '{}' updated", key);
        if let Some(option) = manager.option(key) {
            println!("{} = {}", key, option);
        }
    } else {
        println!("{} unchanged", key);
    }
    Ok(())
}

/// Print the whole configuration in `format`, or the manager's default.
pub fn export(manager: &Manager, format: Option<&str>) -> Result<()> {
    println!("{}", manager.do_export(format)?);
    Ok(())
}

pub fn formats() {
    for name in supported_formats() {
        println!("{}", name);
    }
}
