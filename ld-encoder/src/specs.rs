//! Stock channel specification
//!
//! The deployment's channel map: every logged column of the vehicle
//! telemetry CSV, excluding the unnamed index column at position 0.
//! Order is significant - it defines the output channel order and the
//! id sequence. Tests (and future deployments) can substitute their own
//! spec list; nothing in the pipeline depends on this particular table.

use crate::types::ChannelSpec;

/// (source column, source header name, display name, short name, units)
const STOCK_CHANNELS: &[(usize, &str, &str, &str, &str)] = &[
    (1, "TS", "Time", "Time", "s"),
    (2, "F_BRAKEPRESSURE", "Front Brake Pressure", "F_BrkPrs", "kPa"),
    (3, "R_BRAKEPRESSURE", "Rear Brake Pressure", "R_BrkPrs", "kPa"),
    (4, "STEERING", "Steering", "Steering", "deg"),
    (5, "FLSHOCK", "FL Shock", "FL_Shock", "mm"),
    (6, "FRSHOCK", "FR Shock", "FR_Shock", "mm"),
    (7, "RRSHOCK", "RR Shock", "RR_Shock", "mm"),
    (8, "RLSHOCK", "RL Shock", "RL_Shock", "mm"),
    (9, "CURRENT", "Current", "Current", "A"),
    (10, "BATTERY", "Battery Voltage", "Battery", "V"),
    (11, "IMU_X_ACCEL", "IMU X Accel", "IMU_X", "g"),
    (12, "IMU_Y_ACCEL", "IMU Y Accel", "IMU_Y", "g"),
    (13, "IMU_Z_ACCEL", "IMU Z Accel", "IMU_Z", "g"),
    (14, "IMU_X_GYRO", "IMU X Gyro", "Gyro_X", "deg/s"),
    (15, "IMU_Y_GYRO", "IMU Y Gyro", "Gyro_Y", "deg/s"),
    (16, "IMU_Z_GYRO", "IMU Z Gyro", "Gyro_Z", "deg/s"),
    (17, "FR_SG", "FR Strain Gauge", "FR_SG", "raw"),
    (18, "FL_SG", "FL Strain Gauge", "FL_SG", "raw"),
    (19, "RL_SG", "RL Strain Gauge", "RL_SG", "raw"),
    (20, "RR_SG", "RR Strain Gauge", "RR_SG", "raw"),
    (21, "FLW_AMB", "FL Wheel Ambient", "FLW_Amb", "C"),
    (22, "FLW_OBJ", "FL Wheel Object", "FLW_Obj", "raw"),
    (23, "FLW_RPM", "FL Wheel RPM", "FLW_RPM", "rpm"),
    (24, "FRW_AMB", "FR Wheel Ambient", "FRW_Amb", "C"),
    (25, "FRW_OBJ", "FR Wheel Object", "FRW_Obj", "raw"),
    (26, "FRW_RPM", "FR Wheel RPM", "FRW_RPM", "rpm"),
    (27, "RRW_AMB", "RR Wheel Ambient", "RRW_Amb", "C"),
    (28, "RRW_OBJ", "RR Wheel Object", "RRW_Obj", "raw"),
    (29, "RRW_RPM", "RR Wheel RPM", "RRW_RPM", "rpm"),
    (30, "RLW_AMB", "RL Wheel Ambient", "RLW_Amb", "C"),
    (31, "RLW_OBJ", "RL Wheel Object", "RLW_Obj", "raw"),
    (32, "RLW_RPM", "RL Wheel RPM", "RLW_RPM", "rpm"),
    (33, "BRAKE_FLUID", "Brake Fluid", "BrkFluid", "raw"),
    (34, "THROTTLE_LOAD", "Throttle Load", "Throttle", "%"),
    (35, "BRAKE_LOAD", "Brake Load", "Brake", "%"),
    (36, "DRS", "DRS", "DRS", "bool"),
    (37, "GPS_LON", "GPS Longitude", "GPS_Lon", "deg"),
    (38, "GPS_LAT", "GPS Latitude", "GPS_Lat", "deg"),
    (39, "GPS_SPD", "GPS Speed", "GPS_Spd", "kph"),
    (40, "GPS_FIX", "GPS Fix", "GPS_Fix", "bool"),
    (41, "ECT", "Engine Coolant Temp", "ECT", "C"),
    (42, "OIL_PSR", "Oil Pressure", "Oil_Prs", "kPa"),
    (43, "TPS", "TPS", "TPS", "%"),
    (44, "APS", "APS", "APS", "%"),
    (45, "DRIVEN_WSPD", "Driven Wheel Speed", "DrWSpeed", "kph"),
    (46, "TESTNO", "Test Number", "TestNo", "num"),
    (47, "DTC_FLW", "DTC FL Wheel", "DTC_FLW", "code"),
    (48, "DTC_FRW", "DTC FR Wheel", "DTC_FRW", "code"),
    (49, "DTC_RLW", "DTC RL Wheel", "DTC_RLW", "code"),
    (50, "DTC_RRW", "DTC RR Wheel", "DTC_RRW", "code"),
    (51, "DTC_FLSG", "DTC FL Strain", "DTC_FLSG", "code"),
    (52, "DTC_FRSG", "DTC FR Strain", "DTC_FRSG", "code"),
    (53, "DTC_RLSG", "DTC RL Strain", "DTC_RLSG", "code"),
    (54, "DTC_RRSG", "DTC RR Strain", "DTC_RRSG", "code"),
    (55, "DTC_IMU", "DTC IMU", "DTC_IMU", "code"),
    (56, "GPS_0_", "GPS 0", "GPS_0", "raw"),
    (57, "GPS_1_", "GPS 1", "GPS_1", "raw"),
    (58, "CH_COUNT", "Channel Count", "CH_Count", "num"),
];

/// Materialize the stock channel spec list, in output order.
pub fn stock_channel_specs() -> Vec<ChannelSpec> {
    STOCK_CHANNELS
        .iter()
        .map(|&(col, source, display, short, units)| {
            ChannelSpec::new(col, source, display, short, units)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_spec_count() {
        assert_eq!(stock_channel_specs().len(), 58);
    }

    #[test]
    fn test_stock_spec_columns_unique_and_increasing() {
        let specs = stock_channel_specs();
        for pair in specs.windows(2) {
            assert!(pair[1].source_column > pair[0].source_column);
        }
        // Column 0 (the unnamed index column) is never mapped
        assert_eq!(specs[0].source_column, 1);
    }

    #[test]
    fn test_stock_short_names_fit_field_width() {
        for spec in stock_channel_specs() {
            assert!(
                spec.short_name.len() <= crate::types::MAX_SHORT_NAME_LEN,
                "{} too long",
                spec.short_name
            );
        }
    }
}
