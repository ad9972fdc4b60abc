/// Formata um CNPJ de 14 dígitos como `NN.NNN.NNN/NNNN-NN`.
///
/// Entradas já pontuadas ou fora do padrão (≠ 14 dígitos) voltam
/// inalteradas, para não quebrar dados antigos na exibição.
pub fn format_cnpj(cnpj: &str) -> String {
    let limpo: String = cnpj.chars().filter(|c| c.is_ascii_digit()).collect();
    if limpo.len() != 14 || limpo.len() != cnpj.len() {
        return cnpj.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &limpo[0..2],
        &limpo[2..5],
        &limpo[5..8],
        &limpo[8..12],
        &limpo[12..14]
    )
}

/// Remove tudo que não for dígito (o banco guarda o CNPJ "limpo").
pub fn limpar_cnpj(cnpj: &str) -> String {
    cnpj.chars().filter(|c| c.is_ascii_digit()).collect()
}
