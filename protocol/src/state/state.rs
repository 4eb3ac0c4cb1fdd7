
inst_state_define!{ CoreState,

    /* status */

    1, total_count,    Empty    : TotalCount

    /* state */

    11, balance,       Address  : Balance

}
