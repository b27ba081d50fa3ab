//! Catalog fixtures written to temporary directories.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::json;
use tempfile::TempDir;

const ETCHANTS_CSV: &str = r#"id,name,category,reveals,compatible_materials,incompatible_materials,astm_references,featured
nital-2,Nital 2%,general-purpose,"grain boundaries, ferrite, martensite","[""carbon-steel"",""cast-iron""]",[],"[""E407""]",true
picral-4,Picral 4%,general-purpose,"pearlite, cementite, martensite","[""carbon-steel""]",[],"[""E407""]",false
kellers,Keller's Reagent,material-specific,"grain boundaries, precipitates","[""aluminum""]",[],"[""E407""]",true
caustic,Hot Caustic Macro Etch,material-specific,grain structure,"[""aluminum"",""carbon-steel""]","[""aluminum""]",[],true
"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// A temporary directory holding a JSON material catalog and a CSV etchant
/// catalog.
pub(super) struct CatalogFiles {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) materials: Utf8PathBuf,
    pub(super) etchants: Utf8PathBuf,
}

impl CatalogFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let materials = root.join("materials.json");
        let etchants = root.join("etchants.csv");
        let material_rows = json!([
            {
                "id": "aisi-4140",
                "name": "AISI 4140",
                "category": "Carbon Steel",
                "composition": "Fe, 0.40 C, Cr, Mo",
                "hardness_category": "hard",
                "featured": true
            },
            {
                "id": "al-6061",
                "name": "6061-T6",
                "category": "Aluminum 6061",
                "hardness_category": "soft"
            },
            {
                "id": "ss-304",
                "name": "304 Stainless Steel",
                "category": "Stainless Steel",
                "composition": "Fe, 18 Cr, 8 Ni",
                "microstructure": "Austenitic"
            },
            { "id": "draft", "name": "Draft Alloy", "status": "draft" }
        ]);
        write_utf8(&materials, material_rows.to_string().as_bytes());
        write_utf8(&etchants, ETCHANTS_CSV.as_bytes());
        Self {
            _dir: dir,
            root,
            materials,
            etchants,
        }
    }

    pub(super) fn write_weights(&self, contents: &str) -> Utf8PathBuf {
        let path = self.root.join("weights.json");
        write_utf8(&path, contents.as_bytes());
        path
    }
}

/// Run the CLI with `args` and decode its JSON output.
pub(super) fn run_json(args: &[&str]) -> Result<serde_json::Value, super::CliError> {
    let mut output = Vec::new();
    let argv = std::iter::once("etchant").chain(args.iter().copied());
    super::run_from(argv, &mut output)?;
    Ok(serde_json::from_slice(&output).expect("CLI output should be JSON"))
}

/// Keys of the etchants in a `recommend` response, in rank order.
pub(super) fn match_keys(response: &serde_json::Value) -> Vec<String> {
    response["matches"]
        .as_array()
        .expect("matches array")
        .iter()
        .filter_map(|entry| entry["etchant"]["id"].as_str().map(str::to_owned))
        .collect()
}
