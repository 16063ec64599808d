//! # Sample Term Catalog
//!
//! Bilingual display labels for the sample attribute identifiers that can
//! appear in `invoice.sample.generalAttributes` and
//! `invoice.sample.specificAttributes`.
//!
//! The tables are fixed for the life of the process; lookups return `None`
//! for unknown identifiers and the renderer decides the fallback label.

/// A sample term with its stable identifier and labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleTerm {
    /// Stable term identifier (UUID form)
    pub id: &'static str,
    /// Local-language label
    pub ja: &'static str,
    /// English label
    pub en: &'static str,
}

const fn term(id: &'static str, ja: &'static str, en: &'static str) -> SampleTerm {
    SampleTerm { id, ja, en }
}


/// Terms usable as general sample attributes
pub const GENERAL_SAMPLE_TERMS: &[SampleTerm] = &[
    term("0aadfff2-37de-411f-883a-38b62b2abbce", "化学組成", "Chemical composition"),
    term("5e166ac4-bfcd-457a-84bc-8626abe9188f", "購入元", "Supplier"),
    term("33c6e9dc-5787-0f96-7683-f39281c60419", "化学式、組成式、分子式など", "Chemical formula, composition formula, molecular formula, etc."),
    term("f2d5e89e-01f0-66a2-5d8e-623a4fc31698", "物質名", "Material name"),
    term("a7a6fc7b-ed46-88b0-bba8-a1e34857a049", "試料別名", "Another sample name"),
    term("0d0417a3-3c3b-496a-b0fb-5a26f8a74166", "ロット番号、製造番号など", "Lot number or product number etc"),
    term("e2d20d02-2e38-2cd3-b1b3-66fdb8a11057", "CAS番号", "CAS Number"),
    term("1e70d11d-cbdd-bfd1-9301-9612c29b4060", "試料購入日", "Purchase date"),
    term("1d3cab05-3eaa-cb9b-9a3f-20eb0ca26963", "結晶状態", "Crystalline state"),
    term("efcf34e7-4308-c195-6691-6f4d28ffc9bb", "結晶構造", "Crystal structure"),
    term("e9617207-7f74-ef45-9b05-74eef6e4ecbb", "ピアソン記号", "Pearson symbol"),
    term("f63149a4-e57c-4273-4c1e-dffa41356d28", "空間群", "Space group"),
    term("7cc57dfb-8b70-4b3a-5315-fbce4cbf73d0", "試料形状", "Sample shape"),
    term("dc27a956-263e-f920-e574-5beec912a247", "分子量", "molecular weight"),
    term("efc6a0d5-313e-1871-190c-baaff7d1bf6c", "SMILES String", "SMILES String"),
    term("3edadcff-8a85-51d9-708f-8f76bf055377", "InChI key", "InChI key"),
    term("0444cf53-db47-b208-7b5f-54429291a140", "試料分類", "Sample type"),
    term("fc30c31d-12a3-591a-c837-4f06ab458de0", "生物種", "Taxonomy"),
    term("9a23002a-c398-e521-081a-24b6cd32dbbd", "細胞株", "Cell line"),
    term("b4ce4016-e2bf-e5a1-7cae-ed496c7a776f", "タンパク名", "Protein name"),
    term("8c9b1a88-1530-24d3-4b2e-5441eee5c24f", "遺伝子名", "Gene name"),
    term("047e30f3-f294-e58d-cbe4-6bb588bf4cf8", "NCBIアクセッション番号", "NCBI accession number"),
    term("3adf9874-7bcb-e5f8-99cb-3d6fd9d7b55e", "一般名称", "General name"),
    term("9270879d-d94e-4d3f-2d5c-19568e040004", "InChI", "InChI"),
];

/// Sample classes that group specific attributes
pub const SAMPLE_CLASSES: &[SampleTerm] = &[
    term("01cb3c01-37a4-5a43-d8ca-f523ca99a75b", "有機材料", "organic material"),
    term("932e4fe1-9724-305f-ffc5-1908c31c83e5", "無機材料", "inorganic material"),
    term("a674a8ef-efa8-9497-4ed4-74de55fafddb", "金属・合金", "metals and alloys"),
    term("342ba516-4d02-171c-9bc4-70a3134b47a8", "ポリマー", "polymers"),
    term("52148afb-6759-23e8-c8b8-33912ec5bfcf", "半導体", "semiconductors"),
    term("961c9637-9b83-0e9d-e60e-ffc1e2517afd", "セラミックス", "ceramics"),
    term("0dde5969-3039-739b-b33b-97df40450790", "生物学的物質", "biological"),
];

/// Terms usable as class-specific sample attributes
pub const SPECIFIC_SAMPLE_TERMS: &[SampleTerm] = &[
    term("3a775d54-5c13-fe66-6405-29c05bc931ce", "粘度", "viscosity"),
    term("3edadcff-8a85-51d9-708f-8f76bf055377", "InChI key", "InChI key"),
    term("b4ce4016-e2bf-e5a1-7cae-ed496c7a776f", "タンパク名", "Protein name"),
    term("047e30f3-f294-e58d-cbe4-6bb588bf4cf8", "NCBIアクセッション番号", "NCBI accession number"),
    term("70c2c751-5404-19b7-4a5e-981e6cebbb15", "名称", "Name"),
    term("659da80e-c2ee-2986-41ce-68201b3bc4dd", "沸点", "boiling point"),
    term("3250c45d-0ed6-1438-43b5-eb679918604a", "化学式", "Chemical formula"),
    term("8c9b1a88-1530-24d3-4b2e-5441eee5c24f", "遺伝子名", "Gene name"),
    term("efcf34e7-4308-c195-6691-6f4d28ffc9bb", "結晶構造", "Crystal structure"),
    term("4efc4c3b-727c-c752-cf28-701b55dba1af", "融点", "Melting temperature"),
    term("0444cf53-db47-b208-7b5f-54429291a140", "試料分類", "Sample type"),
    term("efc6a0d5-313e-1871-190c-baaff7d1bf6c", "SMILES String", "SMILES String"),
    term("518e26a0-4262-86f5-3598-80e18e6ff2af", "PubChem", "PubChem"),
    term("f63149a4-e57c-4273-4c1e-dffa41356d28", "空間群", "Space group"),
    term("9270879d-d94e-4d3f-2d5c-19568e040004", "InChI", "InChI"),
    term("9a23002a-c398-e521-081a-24b6cd32dbbd", "細胞株", "Cell line"),
    term("dc27a956-263e-f920-e574-5beec912a247", "分子量", "molecular weight"),
    term("fc30c31d-12a3-591a-c837-4f06ab458de0", "生物種", "Taxonomy"),
    term("e2d20d02-2e38-2cd3-b1b3-66fdb8a11057", "CAS番号", "CAS Number"),
];

fn find(table: &'static [SampleTerm], id: &str) -> Option<&'static SampleTerm> {
    table.iter().find(|t| t.id == id)
}

/// Look up a general sample term
pub fn general_term(id: &str) -> Option<&'static SampleTerm> {
    find(GENERAL_SAMPLE_TERMS, id)
}

/// Look up a sample class
pub fn sample_class(id: &str) -> Option<&'static SampleTerm> {
    find(SAMPLE_CLASSES, id)
}

/// Look up a class-specific sample term
pub fn specific_term(id: &str) -> Option<&'static SampleTerm> {
    find(SPECIFIC_SAMPLE_TERMS, id)
}
