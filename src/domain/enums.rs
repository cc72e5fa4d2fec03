//! Closed string enumerations of the Amazon Connect API.
//!
//! 所有列舉都由 `string_enum!` 產生：`from_value` 只接受宣告過的常數，
//! 未知值 (含空字串) 一律回傳 `ConnectError::UnknownEnumValue`，反序列化亦同。

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            pub fn from_value(value: &str) -> $crate::utils::error::Result<Self> {
                match value {
                    $($value => Ok($name::$variant),)+
                    _ => Err($crate::utils::error::ConnectError::UnknownEnumValue {
                        enum_name: stringify!($name).to_string(),
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::utils::error::ConnectError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                $name::from_value(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                $name::from_value(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

string_enum! {
    /// Contact channel.
    Channel {
        Voice => "VOICE",
        Chat => "CHAT",
        Task => "TASK",
    }
}

string_enum! {
    /// Threshold comparison; only "less than" is supported.
    Comparison {
        Lt => "LT",
    }
}

string_enum! {
    ContactFlowType {
        ContactFlow => "CONTACT_FLOW",
        CustomerQueue => "CUSTOMER_QUEUE",
        CustomerHold => "CUSTOMER_HOLD",
        CustomerWhisper => "CUSTOMER_WHISPER",
        AgentHold => "AGENT_HOLD",
        AgentWhisper => "AGENT_WHISPER",
        OutboundWhisper => "OUTBOUND_WHISPER",
        AgentTransfer => "AGENT_TRANSFER",
        QueueTransfer => "QUEUE_TRANSFER",
    }
}

string_enum! {
    /// Real-time metrics available to `GetCurrentMetricData`.
    CurrentMetricName {
        AgentsOnline => "AGENTS_ONLINE",
        AgentsAvailable => "AGENTS_AVAILABLE",
        AgentsOnCall => "AGENTS_ON_CALL",
        AgentsNonProductive => "AGENTS_NON_PRODUCTIVE",
        AgentsAfterContactWork => "AGENTS_AFTER_CONTACT_WORK",
        AgentsError => "AGENTS_ERROR",
        AgentsStaffed => "AGENTS_STAFFED",
        ContactsInQueue => "CONTACTS_IN_QUEUE",
        OldestContactAge => "OLDEST_CONTACT_AGE",
        ContactsScheduled => "CONTACTS_SCHEDULED",
        AgentsOnContact => "AGENTS_ON_CONTACT",
        SlotsActive => "SLOTS_ACTIVE",
        SlotsAvailable => "SLOTS_AVAILABLE",
    }
}

string_enum! {
    Grouping {
        Queue => "QUEUE",
        Channel => "CHANNEL",
    }
}

string_enum! {
    /// Historical metrics available to `GetMetricData`.
    HistoricalMetricName {
        ContactsQueued => "CONTACTS_QUEUED",
        ContactsHandled => "CONTACTS_HANDLED",
        ContactsAbandoned => "CONTACTS_ABANDONED",
        ContactsConsulted => "CONTACTS_CONSULTED",
        ContactsAgentHungUpFirst => "CONTACTS_AGENT_HUNG_UP_FIRST",
        ContactsHandledIncoming => "CONTACTS_HANDLED_INCOMING",
        ContactsHandledOutbound => "CONTACTS_HANDLED_OUTBOUND",
        ContactsHoldAbandons => "CONTACTS_HOLD_ABANDONS",
        ContactsTransferredIn => "CONTACTS_TRANSFERRED_IN",
        ContactsTransferredOut => "CONTACTS_TRANSFERRED_OUT",
        ContactsTransferredInFromQueue => "CONTACTS_TRANSFERRED_IN_FROM_QUEUE",
        ContactsTransferredOutFromQueue => "CONTACTS_TRANSFERRED_OUT_FROM_QUEUE",
        ContactsMissed => "CONTACTS_MISSED",
        CallbackContactsHandled => "CALLBACK_CONTACTS_HANDLED",
        ApiContactsHandled => "API_CONTACTS_HANDLED",
        Occupancy => "OCCUPANCY",
        HandleTime => "HANDLE_TIME",
        AfterContactWorkTime => "AFTER_CONTACT_WORK_TIME",
        QueuedTime => "QUEUED_TIME",
        AbandonTime => "ABANDON_TIME",
        QueueAnswerTime => "QUEUE_ANSWER_TIME",
        HoldTime => "HOLD_TIME",
        InteractionTime => "INTERACTION_TIME",
        InteractionAndHoldTime => "INTERACTION_AND_HOLD_TIME",
        ServiceLevel => "SERVICE_LEVEL",
    }
}

string_enum! {
    PhoneNumberType {
        TollFree => "TOLL_FREE",
        Did => "DID",
    }
}

string_enum! {
    PhoneType {
        SoftPhone => "SOFT_PHONE",
        DeskPhone => "DESK_PHONE",
    }
}

string_enum! {
    QueueType {
        Standard => "STANDARD",
        Agent => "AGENT",
    }
}

string_enum! {
    /// How a persistent chat picks the contact it resumes from.
    RehydrationType {
        EntirePastSession => "ENTIRE_PAST_SESSION",
        FromSegment => "FROM_SEGMENT",
    }
}

string_enum! {
    Statistic {
        Sum => "SUM",
        Max => "MAX",
        Avg => "AVG",
    }
}

string_enum! {
    Unit {
        Seconds => "SECONDS",
        Count => "COUNT",
        Percent => "PERCENT",
    }
}

string_enum! {
    /// ISO 3166-1 alpha-2 country codes accepted for phone numbers.
    PhoneNumberCountryCode {
        Af => "AF", Al => "AL", Dz => "DZ", As => "AS", Ad => "AD", Ao => "AO",
        Ai => "AI", Aq => "AQ", Ag => "AG", Ar => "AR", Am => "AM", Aw => "AW",
        Au => "AU", At => "AT", Az => "AZ", Bs => "BS", Bh => "BH", Bd => "BD",
        Bb => "BB", By => "BY", Be => "BE", Bz => "BZ", Bj => "BJ", Bm => "BM",
        Bt => "BT", Bo => "BO", Ba => "BA", Bw => "BW", Br => "BR", Io => "IO",
        Vg => "VG", Bn => "BN", Bg => "BG", Bf => "BF", Bi => "BI", Kh => "KH",
        Cm => "CM", Ca => "CA", Cv => "CV", Ky => "KY", Cf => "CF", Td => "TD",
        Cl => "CL", Cn => "CN", Cx => "CX", Cc => "CC", Co => "CO", Km => "KM",
        Ck => "CK", Cr => "CR", Hr => "HR", Cu => "CU", Cw => "CW", Cy => "CY",
        Cz => "CZ", Cd => "CD", Dk => "DK", Dj => "DJ", Dm => "DM", Do => "DO",
        Tl => "TL", Ec => "EC", Eg => "EG", Sv => "SV", Gq => "GQ", Er => "ER",
        Ee => "EE", Et => "ET", Fk => "FK", Fo => "FO", Fj => "FJ", Fi => "FI",
        Fr => "FR", Pf => "PF", Ga => "GA", Gm => "GM", Ge => "GE", De => "DE",
        Gh => "GH", Gi => "GI", Gr => "GR", Gl => "GL", Gd => "GD", Gu => "GU",
        Gt => "GT", Gg => "GG", Gn => "GN", Gw => "GW", Gy => "GY", Ht => "HT",
        Hn => "HN", Hk => "HK", Hu => "HU", Is => "IS", In => "IN", Id => "ID",
        Ir => "IR", Iq => "IQ", Ie => "IE", Im => "IM", Il => "IL", It => "IT",
        Ci => "CI", Jm => "JM", Jp => "JP", Je => "JE", Jo => "JO", Kz => "KZ",
        Ke => "KE", Ki => "KI", Kw => "KW", Kg => "KG", La => "LA", Lv => "LV",
        Lb => "LB", Ls => "LS", Lr => "LR", Ly => "LY", Li => "LI", Lt => "LT",
        Lu => "LU", Mo => "MO", Mk => "MK", Mg => "MG", Mw => "MW", My => "MY",
        Mv => "MV", Ml => "ML", Mt => "MT", Mh => "MH", Mr => "MR", Mu => "MU",
        Yt => "YT", Mx => "MX", Fm => "FM", Md => "MD", Mc => "MC", Mn => "MN",
        Me => "ME", Ms => "MS", Ma => "MA", Mz => "MZ", Mm => "MM", Na => "NA",
        Nr => "NR", Np => "NP", Nl => "NL", An => "AN", Nc => "NC", Nz => "NZ",
        Ni => "NI", Ne => "NE", Ng => "NG", Nu => "NU", Kp => "KP", Mp => "MP",
        No => "NO", Om => "OM", Pk => "PK", Pw => "PW", Pa => "PA", Pg => "PG",
        Py => "PY", Pe => "PE", Ph => "PH", Pn => "PN", Pl => "PL", Pt => "PT",
        Pr => "PR", Qa => "QA", Cg => "CG", Re => "RE", Ro => "RO", Ru => "RU",
        Rw => "RW", Bl => "BL", Sh => "SH", Kn => "KN", Lc => "LC", Mf => "MF",
        Pm => "PM", Vc => "VC", Ws => "WS", Sm => "SM", St => "ST", Sa => "SA",
        Sn => "SN", Rs => "RS", Sc => "SC", Sl => "SL", Sg => "SG", Sx => "SX",
        Sk => "SK", Si => "SI", Sb => "SB", So => "SO", Za => "ZA", Kr => "KR",
        Es => "ES", Lk => "LK", Sd => "SD", Sr => "SR", Sj => "SJ", Sz => "SZ",
        Se => "SE", Ch => "CH", Sy => "SY", Tw => "TW", Tj => "TJ", Tz => "TZ",
        Th => "TH", Tg => "TG", Tk => "TK", To => "TO", Tt => "TT", Tn => "TN",
        Tr => "TR", Tm => "TM", Tc => "TC", Tv => "TV", Vi => "VI", Ug => "UG",
        Ua => "UA", Ae => "AE", Gb => "GB", Us => "US", Uy => "UY", Uz => "UZ",
        Vu => "VU", Va => "VA", Ve => "VE", Vn => "VN", Wf => "WF", Eh => "EH",
        Ye => "YE", Zm => "ZM", Zw => "ZW",
    }
}
