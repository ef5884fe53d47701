/// Source of the OpenFlights airports dataset (raw CSV, no header row)
pub const AIRPORTS_URL: &str =
    "https://sourceforge.net/p/openflights/code/HEAD/tree/openflights/data/airports.dat?format=raw";

/// File written by the file-output binary, relative to the working directory
pub const OUTPUT_FILE: &str = "airports.json";

/// Column indices coerced when typed output is requested
pub const COLUMN_ID: usize = 0;
pub const COLUMN_LATITUDE: usize = 6;
pub const COLUMN_LONGITUDE: usize = 7;
pub const COLUMN_ALTITUDE: usize = 8;
pub const COLUMN_UTC_OFFSET: usize = 9;

pub const INTEGER_COLUMNS: [usize; 2] = [COLUMN_ID, COLUMN_ALTITUDE];
pub const FLOAT_COLUMNS: [usize; 3] = [COLUMN_LATITUDE, COLUMN_LONGITUDE, COLUMN_UTC_OFFSET];
