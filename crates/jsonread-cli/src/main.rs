use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use jsonread_core::{Document, Error, JsonValue};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "jsonread",
    about = "Inspect JSON game configuration with typed reads",
    version
)]
struct Cli {
    /// Log load and read details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Read a value, optionally by key with a typed accessor
    Get(GetArgs),
    /// List children at JSON pointer
    List(ListArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ReadAs {
    String,
    Int,
    Number,
    Bool,
    Object,
    Array,
    Strings,
    Value,
}

#[derive(ClapArgs, Debug)]
struct GetArgs {
    /// JSON file to load
    path: PathBuf,
    /// JSON Pointer selecting the node to read from, e.g. /screenSize
    #[arg(long, default_value = "")]
    ptr: String,
    /// Key to read from the selected node
    #[arg(long)]
    key: Option<String>,
    /// How to read the key
    #[arg(long = "as", value_enum, default_value_t = ReadAs::Value)]
    read_as: ReadAs,
}

#[derive(ClapArgs, Debug)]
struct ListArgs {
    /// JSON file to load
    path: PathBuf,
    /// JSON Pointer, e.g. /screenSize
    #[arg(long, default_value = "")]
    ptr: String,
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    match cli.cmd {
        Cmd::Get(a) => cmd_get(a),
        Cmd::List(a) => cmd_list(a),
    }
}

fn exit_code(e: &Error) -> i32 {
    if e.is_read_error() { 3 } else { 2 }
}

fn fail(e: &Error) -> ! {
    eprintln!("error: {}", e);
    std::process::exit(exit_code(e));
}

fn load(path: &Path) -> Document {
    jsonread_core::load_from_file(path).unwrap_or_else(|e| fail(&e))
}

fn read_key(node: &JsonValue, key: &str, read_as: ReadAs) -> Result<String, Error> {
    use jsonread_core as jr;
    let text = match read_as {
        ReadAs::String => jr::read_string(node, key)?.to_string(),
        ReadAs::Int => jr::read_number_as_int(node, key)?.to_string(),
        ReadAs::Number => jr::read_number(node, key)?.to_string(),
        ReadAs::Bool => jr::read_bool(node, key)?.to_string(),
        ReadAs::Strings => jr::read_array_of_string(node, key)?.join("\n"),
        ReadAs::Object => pretty(jr::read_object(node, key)?),
        ReadAs::Array => pretty(&JsonValue::Array(jr::read_array(node, key)?.to_vec())),
        ReadAs::Value => pretty(jr::read_value(node, key)?),
    };
    Ok(text)
}

fn pretty(v: &JsonValue) -> String {
    serde_json::to_string_pretty(&serde_json::Value::from(v)).unwrap_or_default()
}

fn cmd_get(args: GetArgs) {
    let doc = load(&args.path);
    let node = jsonread_core::get_by_pointer(doc.root(), &args.ptr).unwrap_or_else(|e| fail(&e));
    let Some(key) = args.key else {
        println!("{}", pretty(node));
        return;
    };
    log::debug!("reading {:?} at {:?} as {:?}", key, args.ptr, args.read_as);
    match read_key(node, &key, args.read_as) {
        Ok(s) => println!("{}", s),
        Err(e) => fail(&e),
    }
}

fn cmd_list(args: ListArgs) {
    let doc = load(&args.path);
    let node = jsonread_core::get_by_pointer(doc.root(), &args.ptr).unwrap_or_else(|e| fail(&e));
    for c in jsonread_core::list_children(node) {
        println!(
            "{}\t{}{}",
            c.key_or_index,
            c.kind,
            c.len.map(|n| format!("\t(len={})", n)).unwrap_or_default()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Document {
        jsonread_core::load_from_text(
            r#"{"gameTitle":"My New Game","numPlayers":1.5,"screenSize":{"width":800},"levels":["a","b"]}"#,
        )
        .unwrap()
    }

    #[test]
    fn typed_reads_format_plainly() {
        let doc = settings();
        let root = doc.root();
        assert_eq!(read_key(root, "gameTitle", ReadAs::String).unwrap(), "My New Game");
        assert_eq!(read_key(root, "numPlayers", ReadAs::Int).unwrap(), "1");
        assert_eq!(read_key(root, "numPlayers", ReadAs::Number).unwrap(), "1.5");
        assert_eq!(read_key(root, "levels", ReadAs::Strings).unwrap(), "a\nb");
        assert!(read_key(root, "screenSize", ReadAs::Object).unwrap().contains("\"width\": 800"));
    }

    #[test]
    fn read_failures_use_read_exit_code() {
        let doc = settings();
        let err = read_key(doc.root(), "gameTitle", ReadAs::Bool).unwrap_err();
        assert_eq!(exit_code(&err), 3);
        let err = jsonread_core::load_from_text("{").unwrap_err();
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn cli_parses_get() {
        let cli = Cli::try_parse_from([
            "jsonread", "get", "settings.json", "--ptr", "/screenSize", "--key", "width", "--as",
            "int",
        ])
        .unwrap();
        match cli.cmd {
            Cmd::Get(a) => {
                assert_eq!(a.ptr, "/screenSize");
                assert_eq!(a.key.as_deref(), Some("width"));
                assert_eq!(a.read_as, ReadAs::Int);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
