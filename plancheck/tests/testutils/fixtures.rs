//! Explain output captured from three engine release lines
//!
//! `*_V2` tables use the four column layout with `inner:` join annotations,
//! `*_V3` tables add the access object column, `*_V4` tables mark join sides
//! with `(Build)` / `(Probe)` and print indexes as `name(columns)`.

pub const JOIN_SQL: &str = "explain select * from t t1, t t2 where t1.a=t2.b";

pub const JOIN_V2: &str = r#"
	+--------------------------+----------+------+--------------------------------------------------------------------+
	| id                       | count    | task | operator info                                                      |
	+--------------------------+----------+------+--------------------------------------------------------------------+
	| HashLeftJoin_13          | 12487.50 | root | inner join, inner:TableReader_17, equal:[eq(test.t1.a, test.t2.b)] |
	| ├─TableReader_20         | 9990.00  | root | data:Selection_19                                                  |
	| │ └─Selection_19         | 9990.00  | cop  | not(isnull(test.t1.a))                                             |
	| │   └─TableScan_18       | 10000.00 | cop  | table:t1, range:[-inf,+inf], keep order:false, stats:pseudo        |
	| └─TableReader_17         | 9990.00  | root | data:Selection_16                                                  |
	|   └─Selection_16         | 9990.00  | cop  | not(isnull(test.t2.b))                                             |
	|     └─TableScan_15       | 10000.00 | cop  | table:t2, range:[-inf,+inf], keep order:false, stats:pseudo        |
	+--------------------------+----------+------+--------------------------------------------------------------------+"#;

/// Same shape as [`JOIN_V2`] with the scanned tables exchanged
pub const JOIN_V2_SWAPPED_TABLES: &str = r#"
	+--------------------------+----------+------+--------------------------------------------------------------------+
	| id                       | count    | task | operator info                                                      |
	+--------------------------+----------+------+--------------------------------------------------------------------+
	| HashLeftJoin_13          | 12487.50 | root | inner join, inner:TableReader_17, equal:[eq(test.t1.a, test.t2.b)] |
	| ├─TableReader_20         | 9990.00  | root | data:Selection_19                                                  |
	| │ └─Selection_19         | 9990.00  | cop  | not(isnull(test.t1.a))                                             |
	| │   └─TableScan_18       | 10000.00 | cop  | table:t2, range:[-inf,+inf], keep order:false, stats:pseudo        |
	| └─TableReader_17         | 9990.00  | root | data:Selection_16                                                  |
	|   └─Selection_16         | 9990.00  | cop  | not(isnull(test.t2.b))                                             |
	|     └─TableScan_15       | 10000.00 | cop  | table:t1, range:[-inf,+inf], keep order:false, stats:pseudo        |
	+--------------------------+----------+------+--------------------------------------------------------------------+"#;

/// The inner side is printed first and has to be moved second
pub const JOIN_V3: &str = r#"
	+------------------------------+----------+-----------+---------------+----------------------------------------------------------+
	| id                           | estRows  | task      | access object | operator info                                            |
	+------------------------------+----------+-----------+---------------+----------------------------------------------------------+
	| HashRightJoin_22             | 12487.50 | root      |               | inner join, inner:TableReader_26, equal:[eq(t1.a, t2.b)] |
	| ├─TableReader_26             | 9990.00  | root      |               | data:Selection_25                                        |
	| │ └─Selection_25             | 9990.00  | cop[tikv] |               | not(isnull(test.t2.b))                                   |
	| │   └─TableFullScan_24       | 10000.00 | cop[tikv] | table:t2      | keep order:false, stats:pseudo                           |
	| └─TableReader_29             | 9990.00  | root      |               | data:Selection_28                                        |
	|   └─Selection_28             | 9990.00  | cop[tikv] |               | not(isnull(test.t1.a))                                   |
	|     └─TableFullScan_27       | 10000.00 | cop[tikv] | table:t1      | keep order:false, stats:pseudo                           |
	+------------------------------+----------+-----------+---------------+----------------------------------------------------------+"#;

pub const JOIN_V4: &str = r#"
	+------------------------------+----------+-----------+---------------+--------------------------------------------+
	| id                           | estRows  | task      | access object | operator info                              |
	+------------------------------+----------+-----------+---------------+--------------------------------------------+
	| HashJoin_22                  | 12487.50 | root      |               | inner join, equal:[eq(test.t.a, test.t.b)] |
	| ├─TableReader_26(Build)      | 9990.00  | root      |               | data:Selection_25                          |
	| │ └─Selection_25             | 9990.00  | cop[tikv] |               | not(isnull(test.t.b))                      |
	| │   └─TableFullScan_24       | 10000.00 | cop[tikv] | table:t1      | keep order:false, stats:pseudo             |
	| └─TableReader_29(Probe)      | 9990.00  | root      |               | data:Selection_28                          |
	|   └─Selection_28             | 9990.00  | cop[tikv] |               | not(isnull(test.t.a))                      |
	|     └─TableFullScan_27       | 10000.00 | cop[tikv] | table:t2      | keep order:false, stats:pseudo             |
	+------------------------------+----------+-----------+---------------+--------------------------------------------+"#;

/// [`JOIN_V4`] with the probe side printed first
pub const JOIN_V4_PROBE_FIRST: &str = r#"
	+------------------------------+----------+-----------+---------------+--------------------------------------------+
	| id                           | estRows  | task      | access object | operator info                              |
	+------------------------------+----------+-----------+---------------+--------------------------------------------+
	| HashJoin_22                  | 12487.50 | root      |               | inner join, equal:[eq(test.t.a, test.t.b)] |
	| ├─TableReader_29(Probe)      | 9990.00  | root      |               | data:Selection_28                          |
	| │ └─Selection_28             | 9990.00  | cop[tikv] |               | not(isnull(test.t.a))                      |
	| │   └─TableFullScan_27       | 10000.00 | cop[tikv] | table:t2      | keep order:false, stats:pseudo             |
	| └─TableReader_26(Build)      | 9990.00  | root      |               | data:Selection_25                          |
	|   └─Selection_25             | 9990.00  | cop[tikv] |               | not(isnull(test.t.b))                      |
	|     └─TableFullScan_24       | 10000.00 | cop[tikv] | table:t1      | keep order:false, stats:pseudo             |
	+------------------------------+----------+-----------+---------------+--------------------------------------------+"#;

pub const RANGE_SQL: &str = "explain select * from t where a > 10";

pub const RANGE_V2: &str = r#"
	+-------------------+---------+------+----------------------------------------------------------+
	| id                | count   | task | operator info                                            |
	+-------------------+---------+------+----------------------------------------------------------+
	| TableReader_6     | 3333.33 | root | data:TableScan_5                                         |
	| └─TableScan_5     | 3333.33 | cop  | table:t, range:(10,+inf], keep order:false, stats:pseudo |
	+-------------------+---------+------+----------------------------------------------------------+"#;

pub const RANGE_V4: &str = r#"
	+------------------------+---------+-----------+---------------+-------------------------------------------------+
	| id                     | estRows | task      | access object | operator info                                   |
	+------------------------+---------+-----------+---------------+-------------------------------------------------+
	| TableReader_6          | 3333.33 | root      |               | data:TableRangeScan_5                           |
	| └─TableRangeScan_5     | 3333.33 | cop[tikv] | table:t       | range:(10,+inf], keep order:false, stats:pseudo |
	+------------------------+---------+-----------+---------------+-------------------------------------------------+"#;

pub const INDEX_READER_SQL: &str = "explain select b from t where b = 10";

pub const INDEX_READER_V2_B: &str = r#"
	+-------------------+-------+------+-----------------------------------------------------------------+
	| id                | count | task | operator info                                                   |
	+-------------------+-------+------+-----------------------------------------------------------------+
	| IndexReader_6     | 10.00 | root | index:IndexScan_5                                               |
	| └─IndexScan_5     | 10.00 | cop  | table:t, index:b, range:[10,10], keep order:false, stats:pseudo |
	+-------------------+-------+------+-----------------------------------------------------------------+"#;

pub const INDEX_READER_V2_B1: &str = r#"
	+-------------------+-------+------+------------------------------------------------------------------+
	| id                | count | task | operator info                                                    |
	+-------------------+-------+------+------------------------------------------------------------------+
	| IndexReader_6     | 10.00 | root | index:IndexScan_5                                                |
	| └─IndexScan_5     | 10.00 | cop  | table:t, index:b1, range:[10,10], keep order:false, stats:pseudo |
	+-------------------+-------+------+------------------------------------------------------------------+"#;

pub const INDEX_READER_V2_B2: &str = r#"
	+-------------------+-------+------+------------------------------------------------------------------+
	| id                | count | task | operator info                                                    |
	+-------------------+-------+------+------------------------------------------------------------------+
	| IndexReader_6     | 10.00 | root | index:IndexScan_5                                                |
	| └─IndexScan_5     | 10.00 | cop  | table:t, index:b2, range:[10,10], keep order:false, stats:pseudo |
	+-------------------+-------+------+------------------------------------------------------------------+"#;

pub const INDEX_READER_V4_B: &str = r#"
	+------------------------+---------+-----------+---------------------+-----------------------------------------------+
	| id                     | estRows | task      | access object       | operator info                                 |
	+------------------------+---------+-----------+---------------------+-----------------------------------------------+
	| IndexReader_6          | 10.00   | root      |                     | index:IndexRangeScan_5                        |
	| └─IndexRangeScan_5     | 10.00   | cop[tikv] | table:t, index:b(b) | range:[10,10], keep order:false, stats:pseudo |
	+------------------------+---------+-----------+---------------------+-----------------------------------------------+"#;

pub const INDEX_READER_V4_B1: &str = r#"
	+------------------------+---------+-----------+----------------------+-----------------------------------------------+
	| id                     | estRows | task      | access object        | operator info                                 |
	+------------------------+---------+-----------+----------------------+-----------------------------------------------+
	| IndexReader_6          | 10.00   | root      |                      | index:IndexRangeScan_5                        |
	| └─IndexRangeScan_5     | 10.00   | cop[tikv] | table:t, index:b1(b) | range:[10,10], keep order:false, stats:pseudo |
	+------------------------+---------+-----------+----------------------+-----------------------------------------------+"#;

pub const INDEX_LOOKUP_SQL: &str = "explain select * from t where b = 10";

pub const INDEX_LOOKUP_V2: &str = r#"
	+-------------------+-------+------+-----------------------------------------------------------------+
	| id                | count | task | operator info                                                   |
	+-------------------+-------+------+-----------------------------------------------------------------+
	| IndexLookUp_10    | 10.00 | root |                                                                 |
	| ├─IndexScan_8     | 10.00 | cop  | table:t, index:b, range:[10,10], keep order:false, stats:pseudo |
	| └─TableScan_9     | 10.00 | cop  | table:t, keep order:false, stats:pseudo                         |
	+-------------------+-------+------+-----------------------------------------------------------------+"#;

pub const INDEX_LOOKUP_V2_T1: &str = r#"
	+-------------------+-------+------+------------------------------------------------------------------+
	| id                | count | task | operator info                                                    |
	+-------------------+-------+------+------------------------------------------------------------------+
	| IndexLookUp_10    | 10.00 | root |                                                                  |
	| ├─IndexScan_8     | 10.00 | cop  | table:t1, index:b, range:[10,10], keep order:false, stats:pseudo |
	| └─TableScan_9     | 10.00 | cop  | table:t1, keep order:false, stats:pseudo                         |
	+-------------------+-------+------+------------------------------------------------------------------+"#;

pub const INDEX_LOOKUP_V3: &str = r#"
	+-------------------------------+---------+-----------+---------------------+-----------------------------------------------+
	| id                            | estRows | task      | access object       | operator info                                 |
	+-------------------------------+---------+-----------+---------------------+-----------------------------------------------+
	| IndexLookUp_10                | 10.00   | root      |                     |                                               |
	| ├─IndexRangeScan_8            | 10.00   | cop[tikv] | table:t, index:b(b) | range:[10,10], keep order:false, stats:pseudo |
	| └─TableRowIDScan_9            | 10.00   | cop[tikv] | table:t             | keep order:false, stats:pseudo                |
	+-------------------------------+---------+-----------+---------------------+-----------------------------------------------+"#;

pub const INDEX_LOOKUP_V4: &str = r#"
	+-------------------------------+---------+-----------+---------------------+-----------------------------------------------+
	| id                            | estRows | task      | access object       | operator info                                 |
	+-------------------------------+---------+-----------+---------------------+-----------------------------------------------+
	| IndexLookUp_10                | 10.00   | root      |                     |                                               |
	| ├─IndexRangeScan_8(Build)     | 10.00   | cop[tikv] | table:t, index:b(b) | range:[10,10], keep order:false, stats:pseudo |
	| └─TableRowIDScan_9(Probe)     | 10.00   | cop[tikv] | table:t             | keep order:false, stats:pseudo                |
	+-------------------------------+---------+-----------+---------------------+-----------------------------------------------+"#;

pub const PROJECTION_SQL: &str = "explain select b from t where c = 10";

pub const PROJECTION_V2: &str = r#"
	+-----------------------+----------+------+------------------------------------------------------------+
	| id                    | count    | task | operator info                                              |
	+-----------------------+----------+------+------------------------------------------------------------+
	| Projection_4          | 10.00    | root | test.t.b                                                   |
	| └─TableReader_7       | 10.00    | root | data:Selection_6                                           |
	|   └─Selection_6       | 10.00    | cop  | eq(test.t.c, 10)                                           |
	|     └─TableScan_5     | 10000.00 | cop  | table:t, range:[-inf,+inf], keep order:false, stats:pseudo |
	+-----------------------+----------+------+------------------------------------------------------------+"#;

pub const PROJECTION_V4_UNWRAPPED: &str = r#"
	+-------------------------+----------+-----------+---------------+--------------------------------+
	| id                      | estRows  | task      | access object | operator info                  |
	+-------------------------+----------+-----------+---------------+--------------------------------+
	| TableReader_7           | 10.00    | root      |               | data:Selection_6               |
	| └─Selection_6           | 10.00    | cop[tikv] |               | eq(test.t.c, 10)               |
	|   └─TableFullScan_5     | 10000.00 | cop[tikv] | table:t       | keep order:false, stats:pseudo |
	+-------------------------+----------+-----------+---------------+--------------------------------+"#;

pub const SBTEST_SQL: &str = "select c from sbtest1 where k = 421009";

pub const SBTEST_V2: &str = r#"
	+-------------------+---------+------+-----------------------------------------------------------------+
	| id                |  count  | task | operator info                                                   |
	+-------------------+---------+------+-----------------------------------------------------------------+
	| Projection_4      |  63.60  | root | sbtest_pcc.sbtest1.c                                            |
	| └─IndexLookUp_10  |  63.60  | root |                                                                 |
	|   ├─IndexScan_8   |  63.60  | cop  | table:sbtest1, index:k, range:[421009,421009], keep order:false |
	|   └─TableScan_9   |  63.60  | cop  | table:sbtest1, keep order:false                                 |
	+-------------------+-------+------+-------------------------------------------------------------------+"#;

pub const SBTEST_V4: &str = r#"
	+----------------------------+---------+-------------+------------------------------+------------------------------------------+
	| id                         |  count  | task        | access object                | operator info                            |
	+----------------------------+---------+-------------+------------------------------+------------------------------------------+
	| IndexLookUp_10             |  65.68  |  root       |                              |                                          |
	| ├─IndexRangeScan_8(Build)  |  65.68  |  cop[tikv]  | table:sbtest1, index:k_1(k)  | range:[421009,421009], keep order:false  |
	| └─TableRowIDScan_9(Probe)  |  65.68  |  cop[tikv]  | table:sbtest1                | keep order:false                         |
	+-----------------+-------+------+---------------------------------------------------------------------------------------------+"#;

pub const TOPN_SQL: &str = "select * from shop_delay_msg_task_info where task_type = 02 and status in ('0','1') and topic = 'LIFE_PRODUCT_TOPIC' order by date_updated asc limit 5000";

/// Multi-column index printed as a bare column list
pub const TOPN_V2: &str = r#"
	+------------------------+------------+-------+----------------------------------------------------------------------------------------------------------------+
	| id                     |  count     | task  | operator info                                                                                                  |
	+------------------------+------------+-------+----------------------------------------------------------------------------------------------------------------+
	|  TopN_10               |  90.06     |  root | productdb.shop_delay_msg_task_info.date_updated:asc, offset:0, count:5000                                      |
	|  └─IndexLookUp_25      |  112.57    |  root |                                                                                                                |  
	|    ├─IndexScan_22      |  16253.86  |  cop  | table:shop_delay_msg_task_info, index:status, tags, topic, execute_time, range:["0" "LIFE_PRODUCT_TOPIC" -inf] |
	|    └─Selection_24      |  112.57    |  cop  | lt(productdb.shop_delay_msg_task_info.retrys, 10)                                                              |
	|      └─TableScan_23    |  16253.86  |  cop  | table:shop_delay_msg_task_info, keep order:false                                                               |
	+------------------------+------------+-------+----------------------------------------------------------------------------------------------------------------+"#;

pub const TOPN_V4: &str = r#"
	+-------------------------------+------------+-------------+------------------------------------------------------------------------------------------------+------------------------------------------+
	| id                            |  count     | task        | access object                                                                                  | operator info                            |
	+-------------------------------+------------+-------------+------------------------------------------------------------------------------------------------+------------------------------------------+	
	| TopN_10                       |  124.69    |  root       |                                                                                                |                                          |
	| └─IndexLookUp_36              |  124.69    |  root       |                                                                                                |                                          |
	|   ├─IndexRangeScan_33(Build)  |  16253.86  |  cop[tikv]  |  table:shop_delay_msg_task_info, index:async_status_compose(status, tags, topic, execute_time) |                                          |
	|   └─Selection_35(Probe)       |  124.69    |  cop[tikv]  |                                                                                                |                                          |
	|     └─TableRowIDScan_34       |  16253.86  |  cop[tikv]  |  table:shop_delay_msg_task_info                                                                |                                          |
	+----------------------------+---------+-------------+------------------------------------------------------------------------------------------------------+------------------------------------------+"#;

/// Only two border lines
pub const TRUNCATED_V4: &str = r#"
	+------------------------+---------+-----------+---------------+-----------------------+
	| id                     | estRows | task      | access object | operator info         |
	+------------------------+---------+-----------+---------------+-----------------------+
	| TableReader_6          | 3333.33 | root      |               | data:TableRangeScan_5 |
	| └─TableRangeScan_5     | 3333.33 | cop[tikv] | table:t       | range:(10,+inf]       |"#;

/// Well formed table with an operator the classifier does not know
pub const UNKNOWN_OPERATOR_V2: &str = r#"
	+-------------------+-------+------+------------------+
	| id                | count | task | operator info    |
	+-------------------+-------+------+------------------+
	| Window_7          | 10.00 | root |                  |
	| └─TableReader_6   | 10.00 | root | data:TableScan_5 |
	|   └─TableScan_5   | 10.00 | cop  | table:t          |
	+-------------------+-------+------+------------------+"#;

/// Scan row printed without its branch glyph, reading `t1`
pub const UNNESTED_SCAN_V2_T1: &str = r#"
	+-------------------+---------+------+-----------------------------------------------------------+
	| id                | count   | task | operator info                                             |
	+-------------------+---------+------+-----------------------------------------------------------+
	| TableReader_6     | 3333.33 | root | data:TableScan_5                                          |
	| TableScan_5       | 3333.33 | cop  | table:t1, range:(10,+inf], keep order:false, stats:pseudo |
	+-------------------+---------+------+-----------------------------------------------------------+"#;

/// [`UNNESTED_SCAN_V2_T1`] reading `t2`
pub const UNNESTED_SCAN_V2_T2: &str = r#"
	+-------------------+---------+------+-----------------------------------------------------------+
	| id                | count   | task | operator info                                             |
	+-------------------+---------+------+-----------------------------------------------------------+
	| TableReader_6     | 3333.33 | root | data:TableScan_5                                          |
	| TableScan_5       | 3333.33 | cop  | table:t2, range:(10,+inf], keep order:false, stats:pseudo |
	+-------------------+---------+------+-----------------------------------------------------------+"#;
