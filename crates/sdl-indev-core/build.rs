use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const SCANCODE_MASK: u32 = 1 << 30;
const LIST: &str = "keysyms.list";

struct Entry {
    ident: String,
    name: String,
    code: u32,
}

fn parse_number(text: &str) -> Option<u32> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

fn parse_entry(line_no: usize, line: &str) -> Result<Entry, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (ident, kind, value, name) = match fields.as_slice() {
        [ident, kind, value] => (*ident, *kind, *value, *ident),
        [ident, kind, value, name] => (*ident, *kind, *value, *name),
        _ => return Err(format!("line {}: expected 3 or 4 fields", line_no)),
    };
    let value = parse_number(value)
        .ok_or_else(|| format!("line {}: bad value {:?}", line_no, value))?;
    let code = match kind {
        "ascii" if value <= 0x7F => value,
        "ascii" => return Err(format!("line {}: {} is not ASCII", line_no, value)),
        "scancode" if value < SCANCODE_MASK => value | SCANCODE_MASK,
        "scancode" => return Err(format!("line {}: scancode {} too large", line_no, value)),
        other => return Err(format!("line {}: unknown kind {:?}", line_no, other)),
    };
    Ok(Entry {
        ident: ident.to_string(),
        name: name.to_string(),
        code,
    })
}

fn parse_list(source: &str) -> Result<Vec<Entry>, String> {
    let mut entries = Vec::new();
    let mut idents = HashSet::new();
    let mut names = HashSet::new();
    let mut codes = HashSet::new();

    for (index, raw) in source.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let entry = parse_entry(index + 1, line)?;
        if !idents.insert(entry.ident.clone()) {
            return Err(format!("line {}: duplicate constant {}", index + 1, entry.ident));
        }
        if !names.insert(entry.name.clone()) {
            return Err(format!("line {}: duplicate name {}", index + 1, entry.name));
        }
        if !codes.insert(entry.code) {
            return Err(format!("line {}: duplicate value {:#x}", index + 1, entry.code));
        }
        entries.push(entry);
    }
    Ok(entries)
}

fn generate(entries: &[Entry]) -> String {
    let mut out = String::from(
        r#"
/// Represents a single native key symbol.
///
/// Printable keys carry their ASCII value, the rest carry
/// `SCANCODE_MASK | scancode` like the native keyboard layer does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Keysym(pub u32);

impl Keysym {
    /// Get the raw numeric symbol value
    pub const fn code(self) -> u32 {
        self.0
    }

    /// Get the name of this key symbol
    pub fn name(self) -> &'static str {
        key_name(self.0)
    }
}

impl From<u32> for Keysym {
    fn from(code: u32) -> Self {
        Keysym(code)
    }
}

impl From<Keysym> for u32 {
    fn from(sym: Keysym) -> Self {
        sym.0
    }
}

impl fmt::Display for Keysym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Keysym {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        key_from_name(s).ok_or_else(|| format!("Unknown key: {}", s))
    }
}

impl Keysym {
"#,
    );

    for entry in entries {
        writeln!(
            out,
            "    pub const {}: Keysym = Keysym({:#010x});",
            entry.ident, entry.code
        )
        .unwrap();
    }
    out.push_str("}\n\n/// Named symbols, in lookup order\nconst NAMED_KEYS: &[(Keysym, &str)] = &[\n");
    for entry in entries {
        writeln!(out, "    (Keysym::{}, {:?}),", entry.ident, entry.name).unwrap();
    }
    out.push_str("];\n");
    out
}

fn main() {
    let source = fs::read_to_string(LIST).unwrap_or_else(|e| panic!("reading {}: {}", LIST, e));
    let entries = parse_list(&source).unwrap_or_else(|e| panic!("{}: {}", LIST, e));

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("keysym.rs");
    fs::write(&dest_path, generate(&entries)).unwrap();

    println!("cargo:rerun-if-changed={}", LIST);
    println!("cargo:rerun-if-changed=build.rs");
}
