//! Built-in LwM2M identifier tables.
//!
//! Covers the OMA core objects (0-7) with their resources, the IPSO Smart
//! Objects (3200-3350) and the reusable IPSO resources they share, and the
//! CoAP response codes used by LwM2M.

use std::collections::HashMap;

use crate::definition::{Access, DataType, ResourceDef};
use crate::dictionary::Lwm2mDictionary;
use crate::table::EnumTable;

pub(crate) const OBJECTS: &[(&str, u32)] = &[
    ("lwm2mSecurity", 0),
    ("lwm2mServer", 1),
    ("accessControl", 2),
    ("device", 3),
    ("connMonitor", 4),
    ("firmware", 5),
    ("location", 6),
    ("connStatistics", 7),
    ("dIn", 3200),
    ("dOut", 3201),
    ("aIn", 3202),
    ("aOut", 3203),
    ("generic", 3300),
    ("illuminance", 3301),
    ("presence", 3302),
    ("temperature", 3303),
    ("humidity", 3304),
    ("pwrMea", 3305),
    ("actuation", 3306),
    ("setPoint", 3308),
    ("loadCtrl", 3310),
    ("lightCtrl", 3311),
    ("pwrCtrl", 3312),
    ("accelerometer", 3313),
    ("magnetometer", 3314),
    ("barometer", 3315),
    ("voltage", 3316),
    ("current", 3317),
    ("frequency", 3318),
    ("depth", 3319),
    ("percentage", 3320),
    ("altitude", 3321),
    ("load", 3322),
    ("pressure", 3323),
    ("loudness", 3324),
    ("concentration", 3325),
    ("acidity", 3326),
    ("conductivity", 3327),
    ("power", 3328),
    ("powerFactor", 3329),
    ("distance", 3330),
    ("energy", 3331),
    ("direction", 3332),
    ("time", 3333),
    ("gyrometer", 3334),
    ("colour", 3335),
    ("gpsLocation", 3336),
    ("positioner", 3337),
    ("buzzer", 3338),
    ("audioClip", 3339),
    ("timer", 3340),
    ("addressableTextDisplay", 3341),
    ("onOffSwitch", 3342),
    ("levelControl", 3343),
    ("upDownControl", 3344),
    ("multipleAxisJoystick", 3345),
    ("rate", 3346),
    ("pushButton", 3347),
    ("multistateSelector", 3348),
    ("bitmap", 3349),
    ("stopwatch", 3350),
];

const SECURITY_RESOURCES: &[(&str, u32)] = &[
    ("lwm2mServerURI", 0),
    ("bootstrapServer", 1),
    ("securityMode", 2),
    ("pubKeyId", 3),
    ("serverPubKeyId", 4),
    ("secretKey", 5),
    ("smsSecurityMode", 6),
    ("smsBindingKeyParam", 7),
    ("smsBindingSecretKey", 8),
    ("lwm2mServerSmsNum", 9),
    ("shortServerId", 10),
    ("clientHoldOffTime", 11),
];

const SERVER_RESOURCES: &[(&str, u32)] = &[
    ("shortServerId", 0),
    ("lifetime", 1),
    ("defaultMinPeriod", 2),
    ("defaultMaxPeriod", 3),
    ("disable", 4),
    ("disableTimeout", 5),
    ("notificationStoring", 6),
    ("binding", 7),
    ("regUpdateTrigger", 8),
];

const ACCESS_CONTROL_RESOURCES: &[(&str, u32)] = &[
    ("objectId", 0),
    ("objectInstanceId", 1),
    ("ACL", 2),
    ("ACLOwner", 3),
];

const DEVICE_RESOURCES: &[(&str, u32)] = &[
    ("manuf", 0),
    ("model", 1),
    ("serial", 2),
    ("firmware", 3),
    ("reboot", 4),
    ("factoryReset", 5),
    ("availPwrSrc", 6),
    ("pwrSrcVoltage", 7),
    ("pwrSrcCurrent", 8),
    ("battLevel", 9),
    ("memFree", 10),
    ("errCode", 11),
    ("resetErrCode", 12),
    ("currTime", 13),
    ("UTCOffset", 14),
    ("timezone", 15),
    ("supportedBindingMode", 16),
    ("devType", 17),
    ("hwVer", 18),
    ("swVer", 19),
    ("battStatus", 20),
    ("memTotal", 21),
];

const CONN_MONITOR_RESOURCES: &[(&str, u32)] = &[
    ("nwkBearer", 0),
    ("availNwkBearer", 1),
    ("radioSS", 2),
    ("linkQuality", 3),
    ("ip", 4),
    ("routeIp", 5),
    ("linkUtil", 6),
    ("APN", 7),
    ("cellId", 8),
    ("SMNC", 9),
    ("SMCC", 10),
];

const FIRMWARE_RESOURCES: &[(&str, u32)] = &[
    ("package", 0),
    ("packageURI", 1),
    ("update", 2),
    ("state", 3),
    ("updateSuppObjects", 4),
    ("updateResult", 5),
    ("pkgName", 6),
    ("pkgVer", 7),
];

const LOCATION_RESOURCES: &[(&str, u32)] = &[
    ("lat", 0),
    ("lon", 1),
    ("alt", 2),
    ("uncertainty", 3),
    ("velocity", 4),
    ("timestamp", 5),
];

const CONN_STATISTICS_RESOURCES: &[(&str, u32)] = &[
    ("SMSTxCounter", 0),
    ("SMSRxCounter", 1),
    ("txDataByte", 2),
    ("rxDataByte", 3),
    ("maxMsgSize", 4),
    ("avgMsgSize", 5),
    ("startOrReset", 6),
];

const OBJECT_RESOURCES: &[(&str, &[(&str, u32)])] = &[
    ("lwm2mSecurity", SECURITY_RESOURCES),
    ("lwm2mServer", SERVER_RESOURCES),
    ("accessControl", ACCESS_CONTROL_RESOURCES),
    ("device", DEVICE_RESOURCES),
    ("connMonitor", CONN_MONITOR_RESOURCES),
    ("firmware", FIRMWARE_RESOURCES),
    ("location", LOCATION_RESOURCES),
    ("connStatistics", CONN_STATISTICS_RESOURCES),
];

/// Reusable IPSO resources, shared by all Smart Objects.
pub(crate) const SHARED_RESOURCES: &[(&str, u32)] = &[
    ("dInState", 5500),
    ("counter", 5501),
    ("dInPolarity", 5502),
    ("debouncePeriod", 5503),
    ("edgeSelection", 5504),
    ("counterReset", 5505),
    ("currentTime", 5506),
    ("fractionalTime", 5507),
    ("minXValue", 5508),
    ("maxXValue", 5509),
    ("dOutState", 5550),
    ("dOutPolarity", 5551),
    ("aInCurrValue", 5600),
    ("minMeaValue", 5601),
    ("maxMeaValue", 5602),
    ("minRangeValue", 5603),
    ("maxRangeValue", 5604),
    ("resetMinMaxMeaValues", 5605),
    ("aOutCurrValue", 5650),
    ("sensorValue", 5700),
    ("units", 5701),
    ("xValue", 5702),
    ("yValue", 5703),
    ("zValue", 5704),
    ("compassDir", 5705),
    ("colour", 5706),
    ("appType", 5750),
    ("sensorType", 5751),
    ("instActivePwr", 5800),
    ("minMeaActivePwr", 5801),
    ("maxMeaActivePwr", 5802),
    ("cumulActivePwr", 5805),
    ("activePwrCalib", 5806),
    ("pwrFactor", 5820),
    ("currCalib", 5821),
    ("resetCumulEnergy", 5822),
    ("eventIdentifier", 5823),
    ("startTime", 5824),
    ("durationInMin", 5825),
    ("criticalityLevel", 5826),
    ("avgLoadAdjPct", 5827),
    ("dutyCycle", 5828),
    ("onOff", 5850),
    ("dimmer", 5851),
    ("onTime", 5852),
    ("mstateOut", 5853),
    ("setPointValue", 5900),
    ("busy", 5903),
    ("multiStateIn", 5547),
    ("level", 5548),
    ("applicationType", 5749),
];

pub(crate) const RESPONSE_CODES: &[(&str, u32)] = &[
    ("ok", 200),
    ("created", 201),
    ("deleted", 202),
    ("changed", 204),
    ("content", 205),
    ("badRequest", 400),
    ("unauthorized", 401),
    ("forbidden", 403),
    ("notFound", 404),
    ("notAllowed", 405),
    ("notAcceptable", 406),
    ("timeout", 408),
    ("conflict", 409),
    ("preconditionFailed", 412),
    ("requestTooLarge", 413),
    ("unsupportedFormat", 415),
    ("serverError", 500),
    ("serviceUnavailable", 503),
];

fn def(access: Option<Access>, data_type: DataType) -> ResourceDef {
    ResourceDef::new(access, data_type)
}

fn object_defs() -> HashMap<String, HashMap<String, ResourceDef>> {
    use Access::{E, R, RW, W};
    use DataType::*;

    let tables: Vec<(&str, Vec<(&str, ResourceDef)>)> = vec![
        (
            "lwm2mSecurity",
            vec![
                ("lwm2mServerURI", def(None, String).mandatory()),
                ("bootstrapServer", def(None, Boolean).mandatory()),
                ("securityMode", def(None, Integer).mandatory().with_range(0.0, 4.0)),
                ("pubKeyId", def(None, Opaque).mandatory()),
                ("serverPubKeyId", def(None, Opaque).mandatory()),
                ("secretKey", def(None, Opaque).mandatory()),
                ("smsSecurityMode", def(None, Integer).with_range(0.0, 255.0)),
                ("smsBindingKeyParam", def(None, Opaque)),
                ("smsBindingSecretKey", def(None, Opaque)),
                ("lwm2mServerSmsNum", def(None, String)),
                ("shortServerId", def(None, Integer).with_range(1.0, 65534.0)),
                ("clientHoldOffTime", def(None, Integer)),
            ],
        ),
        (
            "lwm2mServer",
            vec![
                ("shortServerId", def(Some(R), Integer).mandatory().with_range(1.0, 65535.0)),
                ("lifetime", def(Some(RW), Integer).mandatory()),
                ("defaultMinPeriod", def(Some(RW), Integer)),
                ("defaultMaxPeriod", def(Some(RW), Integer)),
                ("disable", def(Some(E), Execute)),
                ("disableTimeout", def(Some(RW), Integer)),
                ("notificationStoring", def(Some(RW), Boolean).mandatory()),
                ("binding", def(Some(RW), String).mandatory()),
                ("regUpdateTrigger", def(Some(E), Execute).mandatory()),
            ],
        ),
        (
            "accessControl",
            vec![
                ("objectId", def(Some(R), Integer).mandatory().with_range(1.0, 65534.0)),
                ("objectInstanceId", def(Some(R), Integer).mandatory().with_range(0.0, 65535.0)),
                ("ACL", def(Some(RW), Integer).multiple().with_range(0.0, 65535.0)),
                ("ACLOwner", def(Some(RW), Integer).mandatory().with_range(0.0, 65535.0)),
            ],
        ),
        (
            "device",
            vec![
                ("manuf", def(Some(R), String)),
                ("model", def(Some(R), String)),
                ("serial", def(Some(R), String)),
                ("firmware", def(Some(R), String)),
                ("reboot", def(Some(E), Execute).mandatory()),
                ("factoryReset", def(Some(E), Execute)),
                ("availPwrSrc", def(Some(R), Integer).multiple().with_range(0.0, 7.0)),
                ("pwrSrcVoltage", def(Some(R), Integer).multiple()),
                ("pwrSrcCurrent", def(Some(R), Integer).multiple()),
                ("battLevel", def(Some(R), Integer).with_range(0.0, 100.0)),
                ("memFree", def(Some(R), Integer)),
                ("errCode", def(Some(R), Integer).multiple().mandatory().with_range(0.0, 8.0)),
                ("resetErrCode", def(Some(E), Execute)),
                ("currTime", def(Some(RW), Time)),
                ("UTCOffset", def(Some(RW), String)),
                ("timezone", def(Some(RW), String)),
                ("supportedBindingMode", def(Some(R), String).mandatory()),
                ("devType", def(Some(R), String)),
                ("hwVer", def(Some(R), String)),
                ("swVer", def(Some(R), String)),
                ("battStatus", def(Some(R), Integer).with_range(0.0, 6.0)),
                ("memTotal", def(Some(R), Integer)),
            ],
        ),
        (
            "connMonitor",
            vec![
                ("nwkBearer", def(Some(R), Integer).mandatory()),
                ("availNwkBearer", def(Some(R), Integer).multiple().mandatory()),
                ("radioSS", def(Some(R), Integer).mandatory()),
                ("linkQuality", def(Some(R), Integer)),
                ("ip", def(Some(R), String).multiple().mandatory()),
                ("routeIp", def(Some(R), String).multiple()),
                ("linkUtil", def(Some(R), Integer).with_range(0.0, 100.0)),
                ("APN", def(Some(R), String).multiple()),
                ("cellId", def(Some(R), Integer)),
                ("SMNC", def(Some(R), Integer)),
                ("SMCC", def(Some(R), Integer)),
            ],
        ),
        (
            "firmware",
            vec![
                ("package", def(Some(W), Opaque).mandatory()),
                ("packageURI", def(Some(W), String).mandatory()),
                ("update", def(Some(E), Execute).mandatory()),
                ("state", def(Some(R), Integer).mandatory().with_range(0.0, 3.0)),
                ("updateSuppObjects", def(Some(RW), Boolean)),
                ("updateResult", def(Some(R), Integer).mandatory().with_range(0.0, 9.0)),
                ("pkgName", def(Some(R), String)),
                ("pkgVer", def(Some(R), String)),
            ],
        ),
        (
            "location",
            vec![
                ("lat", def(Some(R), String).mandatory()),
                ("lon", def(Some(R), String).mandatory()),
                ("alt", def(Some(R), String)),
                ("uncertainty", def(Some(R), String)),
                ("velocity", def(Some(R), Opaque)),
                ("timestamp", def(Some(R), Time).mandatory()),
            ],
        ),
        (
            "connStatistics",
            vec![
                ("SMSTxCounter", def(Some(R), Integer)),
                ("SMSRxCounter", def(Some(R), Integer)),
                ("txDataByte", def(Some(R), Integer)),
                ("rxDataByte", def(Some(R), Integer)),
                ("maxMsgSize", def(Some(R), Integer)),
                ("avgMsgSize", def(Some(R), Integer)),
                ("startOrReset", def(Some(E), Execute).mandatory()),
            ],
        ),
    ];

    tables
        .into_iter()
        .map(|(object, defs)| {
            let defs: HashMap<_, _> = defs
                .into_iter()
                .map(|(rid, def)| (rid.to_string(), def))
                .collect();
            (object.to_string(), defs)
        })
        .collect()
}

fn shared_defs() -> HashMap<String, ResourceDef> {
    use Access::{E, R, RW};
    use DataType::*;

    let defs = [
        ("dInState", def(Some(R), Boolean).mandatory()),
        ("counter", def(Some(R), Integer)),
        ("dInPolarity", def(Some(RW), Boolean)),
        ("debouncePeriod", def(Some(RW), Integer)),
        ("edgeSelection", def(Some(RW), Integer).with_range(1.0, 3.0)),
        ("counterReset", def(Some(E), Execute)),
        ("currentTime", def(Some(RW), Time)),
        ("fractionalTime", def(Some(RW), Float).with_range(0.0, 1.0)),
        ("minXValue", def(Some(R), Float)),
        ("maxXValue", def(Some(R), Float)),
        ("dOutState", def(Some(RW), Boolean).mandatory()),
        ("dOutPolarity", def(Some(RW), Boolean)),
        ("aInCurrValue", def(Some(R), Float).mandatory()),
        ("minMeaValue", def(Some(R), Float)),
        ("maxMeaValue", def(Some(R), Float)),
        ("minRangeValue", def(Some(R), Float)),
        ("maxRangeValue", def(Some(R), Float)),
        ("resetMinMaxMeaValues", def(Some(E), Execute)),
        ("aOutCurrValue", def(Some(RW), Float).mandatory()),
        ("sensorValue", def(Some(R), Float).mandatory()),
        ("units", def(Some(R), String)),
        ("xValue", def(Some(R), Float).mandatory()),
        ("yValue", def(Some(R), Float)),
        ("zValue", def(Some(R), Float)),
        ("compassDir", def(Some(R), Float).with_range(0.0, 360.0)),
        ("colour", def(Some(RW), String).mandatory()),
        ("appType", def(Some(RW), String)),
        ("sensorType", def(Some(R), String)),
        ("instActivePwr", def(Some(R), Float).mandatory()),
        ("minMeaActivePwr", def(Some(R), Float)),
        ("maxMeaActivePwr", def(Some(R), Float)),
        ("cumulActivePwr", def(Some(R), Float)),
        ("activePwrCalib", def(Some(RW), Float)),
        ("pwrFactor", def(Some(R), Float)),
        ("currCalib", def(Some(RW), Float)),
        ("resetCumulEnergy", def(Some(E), Execute)),
        ("eventIdentifier", def(Some(RW), String)),
        ("startTime", def(Some(RW), Time)),
        ("durationInMin", def(Some(RW), Integer)),
        ("criticalityLevel", def(Some(RW), Integer).with_range(0.0, 3.0)),
        ("avgLoadAdjPct", def(Some(RW), Integer).with_range(0.0, 100.0)),
        ("dutyCycle", def(Some(RW), Integer).with_range(0.0, 100.0)),
        ("onOff", def(Some(RW), Boolean).mandatory()),
        ("dimmer", def(Some(RW), Integer).with_range(0.0, 100.0)),
        ("onTime", def(Some(RW), Integer)),
        ("mstateOut", def(Some(RW), String)),
        ("setPointValue", def(Some(RW), Float).mandatory()),
        ("busy", def(Some(R), Boolean)),
        ("multiStateIn", def(Some(R), Integer).mandatory()),
        ("level", def(Some(RW), Float)),
        ("applicationType", def(Some(RW), String)),
    ];

    defs.into_iter()
        .map(|(rid, def)| (rid.to_string(), def))
        .collect()
}

pub(crate) fn builtin_dictionary() -> Lwm2mDictionary {
    let object_resources = OBJECT_RESOURCES
        .iter()
        .map(|(object, rids)| (object.to_string(), EnumTable::from_pairs(rids)))
        .collect();

    Lwm2mDictionary::from_parts(
        EnumTable::from_pairs(OBJECTS),
        EnumTable::from_pairs(SHARED_RESOURCES),
        object_resources,
        EnumTable::from_pairs(RESPONSE_CODES),
        object_defs(),
        shared_defs(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_have_unique_keys_and_values() {
        let check = |pairs: &[(&str, u32)]| {
            let keys: std::collections::HashSet<_> = pairs.iter().map(|(k, _)| *k).collect();
            let values: std::collections::HashSet<_> = pairs.iter().map(|(_, v)| *v).collect();
            assert_eq!(keys.len(), pairs.len());
            assert_eq!(values.len(), pairs.len());
        };

        check(OBJECTS);
        check(SHARED_RESOURCES);
        check(RESPONSE_CODES);
        for (_, rids) in OBJECT_RESOURCES {
            check(rids);
        }
    }

    #[test]
    fn test_every_object_resource_has_a_def() {
        let defs = object_defs();
        for (object, rids) in OBJECT_RESOURCES {
            let object_defs = defs.get(*object).unwrap();
            for (rid, _) in rids.iter() {
                assert!(object_defs.contains_key(*rid), "{}/{} has no def", object, rid);
            }
        }
    }

    #[test]
    fn test_every_shared_resource_has_a_def() {
        let defs = shared_defs();
        for (rid, _) in SHARED_RESOURCES {
            assert!(defs.contains_key(*rid), "{} has no def", rid);
        }
    }
}
