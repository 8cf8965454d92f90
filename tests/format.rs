use std::{error::Error, path::Path};

use test_utils::check_format;

const SRC_PATH: &str = "./demos/desformatado.sl";
const EXPECTED: &str = "numero x = 2 * 3 + 1\nimprimir(x)\n";

#[test]
fn format_canonicalises_spacing() -> Result<(), Box<dyn Error>> {
    check_format(Path::new(SRC_PATH), EXPECTED)
}
