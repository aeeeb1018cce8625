// table.rs - classifier label -> specialized processor type
use std::collections::HashMap;
use std::sync::LazyLock;

const DOCUMENT_PROCESSORS: &[(&str, &str)] = &[
    // procurement
    ("air_travel_statement", "EXPENSE_PROCESSOR"),
    ("car_rental_statement", "EXPENSE_PROCESSOR"),
    ("credit_card_slip", "EXPENSE_PROCESSOR"),
    ("credit_note", "INVOICE_PROCESSOR"),
    ("debit_note", "INVOICE_PROCESSOR"),
    ("ground_transportation_statement", "EXPENSE_PROCESSOR"),
    ("hotel_statement", "EXPENSE_PROCESSOR"),
    ("invoice_statement", "INVOICE_PROCESSOR"),
    ("purchase_order", "PURCHASE_ORDER_PROCESSOR"),
    ("receipt_statement", "EXPENSE_PROCESSOR"),
    ("restaurant_statement", "EXPENSE_PROCESSOR"),
    ("utility_statement", "UTILITY_PROCESSOR"),
    // lending
    ("1003", "FORM_1003_PROCESSOR"),
    ("1003_2009", "FORM_1003_PROCESSOR"),
    ("1005_1996", "FORM_1005_PROCESSOR"),
    ("1040", "FORM_1040_PROCESSOR"),
    ("1040_2018", "FORM_1040_PROCESSOR"),
    ("1040_2019", "FORM_1040_PROCESSOR"),
    ("1040_2020", "FORM_1040_PROCESSOR"),
    ("1040_2021", "FORM_1040_PROCESSOR"),
    ("1040nr", "FORM_1040NR_PROCESSOR"),
    ("1040nr_2018", "FORM_1040NR_PROCESSOR"),
    ("1040nr_2019", "FORM_1040NR_PROCESSOR"),
    ("1040nr_2020", "FORM_1040NR_PROCESSOR"),
    ("1040nr_2021", "FORM_1040NR_PROCESSOR"),
    ("1040sc", "FORM_1040SCH_C_PROCESSOR"),
    ("1040sc_2018", "FORM_1040SCH_C_PROCESSOR"),
    ("1040sc_2019", "FORM_1040SCH_C_PROCESSOR"),
    ("1040sc_2020", "FORM_1040SCH_C_PROCESSOR"),
    ("1040sc_2021", "FORM_1040SCH_C_PROCESSOR"),
    ("1040sr", "FORM_1040SR_PROCESSOR"),
    ("1040sr_2018", "FORM_1040SR_PROCESSOR"),
    ("1040sr_2019", "FORM_1040SR_PROCESSOR"),
    ("1040sr_2020", "FORM_1040SR_PROCESSOR"),
    ("1040sr_2021", "FORM_1040SR_PROCESSOR"),
    ("1065", "FORM_1065_PROCESSOR"),
    ("1065_2018", "FORM_1065_PROCESSOR"),
    ("1065_2019", "FORM_1065_PROCESSOR"),
    ("1065_2020", "FORM_1065_PROCESSOR"),
    ("1065_2021", "FORM_1065_PROCESSOR"),
    ("1076_2016", "FORM_1076_PROCESSOR"),
    ("1099div", "FORM_1099DIV_PROCESSOR"),
    ("1099div_2018", "FORM_1099DIV_PROCESSOR"),
    ("1099div_2019", "FORM_1099DIV_PROCESSOR"),
    ("1099div_2020", "FORM_1099DIV_PROCESSOR"),
    ("1099div_2021", "FORM_1099DIV_PROCESSOR"),
    ("1099g", "FORM_1099G_PROCESSOR"),
    ("1099g_2018", "FORM_1099G_PROCESSOR"),
    ("1099g_2019", "FORM_1099G_PROCESSOR"),
    ("1099g_2020", "FORM_1099G_PROCESSOR"),
    ("1099g_2021", "FORM_1099G_PROCESSOR"),
    ("1099int", "FORM_1099INT_PROCESSOR"),
    ("1099int_2018", "FORM_1099INT_PROCESSOR"),
    ("1099int_2019", "FORM_1099INT_PROCESSOR"),
    ("1099int_2020", "FORM_1099INT_PROCESSOR"),
    ("1099int_2021", "FORM_1099INT_PROCESSOR"),
    ("1099misc", "FORM_1099MISC_PROCESSOR"),
    ("1099misc_2018", "FORM_1099MISC_PROCESSOR"),
    ("1099misc_2019", "FORM_1099MISC_PROCESSOR"),
    ("1099misc_2020", "FORM_1099MISC_PROCESSOR"),
    ("1099misc_2021", "FORM_1099MISC_PROCESSOR"),
    ("1099nec", "FORM_1099NEC_PROCESSOR"),
    ("1099nec_2018", "FORM_1099NEC_PROCESSOR"),
    ("1099nec_2019", "FORM_1099NEC_PROCESSOR"),
    ("1099nec_2020", "FORM_1099NEC_PROCESSOR"),
    ("1099nec_2021", "FORM_1099NEC_PROCESSOR"),
    ("1099r", "FORM_1099R_PROCESSOR"),
    ("1099r_2018", "FORM_1099R_PROCESSOR"),
    ("1099r_2019", "FORM_1099R_PROCESSOR"),
    ("1099r_2020", "FORM_1099R_PROCESSOR"),
    ("1099r_2021", "FORM_1099R_PROCESSOR"),
    ("1099sb", "FORM_1040SCH_B_PROCESSOR"),
    ("1099sb_2018", "FORM_1040SCH_B_PROCESSOR"),
    ("1099sb_2019", "FORM_1040SCH_B_PROCESSOR"),
    ("1099sb_2020", "FORM_1040SCH_B_PROCESSOR"),
    ("1099sb_2021", "FORM_1040SCH_B_PROCESSOR"),
    ("1099sd", "FORM_1040SCH_D_PROCESSOR"),
    ("1099sd_2018", "FORM_1040SCH_D_PROCESSOR"),
    ("1099sd_2019", "FORM_1040SCH_D_PROCESSOR"),
    ("1099sd_2020", "FORM_1040SCH_D_PROCESSOR"),
    ("1099sd_2021", "FORM_1040SCH_D_PROCESSOR"),
    ("1099se", "FORM_1040SCH_E_PROCESSOR"),
    ("1099se_2018", "FORM_1040SCH_E_PROCESSOR"),
    ("1099se_2019", "FORM_1040SCH_E_PROCESSOR"),
    ("1099se_2020", "FORM_1040SCH_E_PROCESSOR"),
    ("1099se_2021", "FORM_1040SCH_E_PROCESSOR"),
    ("1099ssa", "FORM_SSA1099_PROCESSOR"),
    ("1099ssa_2018", "FORM_SSA1099_PROCESSOR"),
    ("1099ssa_2019", "FORM_SSA1099_PROCESSOR"),
    ("1099ssa_2020", "FORM_SSA1099_PROCESSOR"),
    ("1099ssa_2021", "FORM_SSA1099_PROCESSOR"),
    ("1120", "FORM_1120_PROCESSOR"),
    ("1120_2018", "FORM_1120_PROCESSOR"),
    ("1120_2019", "FORM_1120_PROCESSOR"),
    ("1120_2020", "FORM_1120_PROCESSOR"),
    ("1120_2021", "FORM_1120_PROCESSOR"),
    ("1120s", "FORM_1120S_PROCESSOR"),
    ("1120s_2018", "FORM_1120S_PROCESSOR"),
    ("1120s_2019", "FORM_1120S_PROCESSOR"),
    ("1120s_2020", "FORM_1120S_PROCESSOR"),
    ("1120s_2021", "FORM_1120S_PROCESSOR"),
    ("1_4_Family_Rider_3170", "FORM_FAMILY_RIDER_PROCESSOR"),
    ("3108_Adjustable_Rate_Rider", "FORM_ADJUSTABLE_RIDER_PROCESSOR"),
    ("3140_Condominium_Rider", "FORM_CONDOMINIUM_RIDER_PROCESSOR"),
    ("3190_Balloon_Rider", "FORM_BALLOON_RIDER_PROCESSOR"),
    ("3890_Second_Home_Rider", "FORM_SECOND_HOME_RIDER_PROCESSOR"),
    ("4506_T", "FORM_4506T_PROCESSOR"),
    ("4506_T_2018", "FORM_4506T_PROCESSOR"),
    ("4506_T_2019", "FORM_4506T_PROCESSOR"),
    ("4506_T_2020", "FORM_4506T_PROCESSOR"),
    ("4506_T_2021", "FORM_4506T_PROCESSOR"),
    ("4506_T_EZ", "FORM_4506T_EZ_PROCESSOR"),
    ("4506_T_EZ_2018", "FORM_4506T_EZ_PROCESSOR"),
    ("4506_T_EZ_2019", "FORM_4506T_EZ_PROCESSOR"),
    ("4506_T_EZ_2020", "FORM_4506T_EZ_PROCESSOR"),
    ("4506_T_EZ_2021", "FORM_4506T_EZ_PROCESSOR"),
    ("account_statement_bank", "BANK_STATEMENT_PROCESSOR"),
    ("account_statement_investment_and_retirement", "RETIREMENT_INVESTMENT_STATEMENT_PROCESSOR"),
    ("dhs_flood_certification", "FORM_FLOOD_CERTIFICATE_PROCESSOR"),
    ("f11_12956_2017", "FORM_F11_12956_PROCESSOR"),
    ("hud_54114", "FORM_HUD54114_PROCESSOR"),
    ("hud_92051", "FORM_HUD92051_PROCESSOR"),
    ("hud_92541", "FORM_HUD92541_PROCESSOR"),
    ("hud_92544", "FORM_HUD92544_PROCESSOR"),
    ("hud_92800", "FORM_HUD92800_PROCESSOR"),
    ("hud_92900a", "FORM_HUD92900A_PROCESSOR"),
    ("hud_92900b", "FORM_HUD92900B_PROCESSOR"),
    ("hud_92900lt", "FORM_HUD92900LT_PROCESSOR"),
    ("hud_92900ws", "FORM_HUD92900WS_PROCESSOR"),
    ("mortgage_statements", "MORTGAGE_STATEMENT_PROCESSOR"),
    ("payslip", "PAYSTUB_PROCESSOR"),
    ("property_insurance", "PROPERTY_INSURANCE_PROCESSOR"),
    ("pud_rider", "FORM_PUD_RIDER_PROCESSOR"),
    ("revocable_trust_rider", "FORM_REVOCABLE_TRUST_RIDER_PROCESSOR"),
    ("ssa_89", "FORM_SSA89_PROCESSOR"),
    ("ssa_89_2018", "FORM_SSA89_PROCESSOR"),
    ("ssa_89_2019", "FORM_SSA89_PROCESSOR"),
    ("ssa_89_2020", "FORM_SSA89_PROCESSOR"),
    ("ssa_89_2021", "FORM_SSA89_PROCESSOR"),
    ("ucc_financing_statement", "FORM_UCC1_PROCESSOR"),
    ("usda_ad_3030", "FORM_USDA_CONDITIONAL_COMMITMENT_PROCESSOR"),
    ("vba_26_0551_2004", "FORM_VBA26_0551_PROCESSOR"),
    ("vba_26_8923_2021", "FORM_VBA26_8923_PROCESSOR"),
    ("w2", "FORM_W2_PROCESSOR"),
    ("w2_2018", "FORM_W2_PROCESSOR"),
    ("w2_2019", "FORM_W2_PROCESSOR"),
    ("w2_2020", "FORM_W2_PROCESSOR"),
    ("w2_2021", "FORM_W2_PROCESSOR"),
    ("w9", "FORM_W9_PROCESSOR"),
    ("w9_2017", "FORM_W9_PROCESSOR"),
    ("w9_2018", "FORM_W9_PROCESSOR"),
    ("w9_2019", "FORM_W9_PROCESSOR"),
    ("w9_2020", "FORM_W9_PROCESSOR"),
    ("w9_2021", "FORM_W9_PROCESSOR"),
    // identity
    ("us_driver_license", "US_DRIVER_LICENSE_PROCESSOR"),
    ("us_passport", "US_PASSPORT_PROCESSOR"),
];

pub(super) static PROCESSOR_TYPES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| DOCUMENT_PROCESSORS.iter().copied().collect());
