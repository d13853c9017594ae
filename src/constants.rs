/// Cap on a single deposit and on the vault's total locked value
pub const MAX_DEPOSIT: i128 = 1_000_000_000_000;
