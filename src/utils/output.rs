/// Format the aliases found in a keystore the way they are announced on the console.
///
/// Several aliases are numbered, a single alias is printed bare.
pub fn format_alias_list(aliases: &[String]) -> String {
    match aliases {
        [] => String::new(),
        [alias] => format!("1 alias found:-\n{alias}"),
        _ => {
            let mut lines = vec![format!("{} aliases found:-", aliases.len())];
            lines.extend(
                aliases
                    .iter()
                    .enumerate()
                    .map(|(index, alias)| format!("{}) {alias}", index + 1)),
            );
            lines.join("\n")
        }
    }
}

/// Print the alias announcement to stdout
pub fn print_alias_list(aliases: &[String]) {
    let text = format_alias_list(aliases);
    if !text.is_empty() {
        println!("{text}");
    }
}

/// Print a freshly written CSR to stdout
pub fn print_csr(file_name: &str, csr_pem: &str) {
    println!("\nCertificate signing request file {file_name} created.");
    println!("{csr_pem}");
}
