pub const PATH_SEPARATOR: char = '.';
pub const INBOUND_DELIMITER: char = '$';
